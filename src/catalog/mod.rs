//! The built-in DULA FF product catalog.
//!
//! The consultant does not query this catalog at runtime; the lineup is
//! spliced into the persona's system instruction so the model can discuss
//! it conversationally. The `catalog` subcommand prints it for humans.

use std::fmt;

/// Product category (closed set).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Category {
    Pc,
    Peripherals,
    Audio,
    Furniture,
    Components,
    Software,
}

impl Category {
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Pc => "PC",
            Self::Peripherals => "Peripherals",
            Self::Audio => "Audio",
            Self::Furniture => "Furniture",
            Self::Components => "Components",
            Self::Software => "Software",
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One item in the lineup.
#[derive(Debug, Clone)]
pub struct Product {
    pub id: &'static str,
    pub name: &'static str,
    pub category: Category,
    /// Price in Indian rupees.
    pub price: f64,
    pub description: &'static str,
    pub image: &'static str,
    pub specs: &'static [&'static str],
    pub rating: f64,
    pub is_new: bool,
}

/// The premium lineup, as sold on the storefront.
pub const PRODUCTS: &[Product] = &[
    Product {
        id: "1",
        name: "60% Drag Headshot File",
        category: Category::Software,
        price: 300.00,
        description: "The legendary DULA FF optimization file. Featuring elite drag sensitivity \
                      and headshot calibration settings used by pro players.",
        image: "https://img.freepik.com/premium-vector/rabbit-esport-mascot-logo-design_139366-444.jpg",
        specs: &["99% Drag Success", "Universal Device Sync", "Anti-Ban Protected"],
        rating: 5.0,
        is_new: true,
    },
    Product {
        id: "2",
        name: "Ghost V3 Wireless Mouse",
        category: Category::Peripherals,
        price: 39900.50,
        description: "80g ultra-lightweight ergonomic mouse with zero latency wireless technology.",
        image: "https://images.unsplash.com/photo-1615663245857-ac93bb7c39e7?auto=format&fit=crop&q=80&w=800",
        specs: &["26,000 DPI Sensor", "70h Battery Life", "HyperSpeed Wireless"],
        rating: 4.8,
        is_new: false,
    },
    Product {
        id: "3",
        name: "DULA FF Titan 27\" QHD",
        category: Category::Pc,
        price: 154_000.00,
        description: "240Hz refresh rate with 0.5ms response time for fluid gaming performance.",
        image: "https://images.unsplash.com/photo-1527443224154-c4a3942d3acf?auto=format&fit=crop&q=80&w=800",
        specs: &["IPS Panel", "HDR 400", "G-Sync Compatible"],
        rating: 5.0,
        is_new: true,
    },
    Product {
        id: "4",
        name: "Echo Pro Surround Headset",
        category: Category::Audio,
        price: 48900.00,
        description: "True spatial audio for precise positioning in FPS and immersive RPG sessions.",
        image: "https://images.unsplash.com/photo-1546435770-a3e426ca473b?auto=format&fit=crop&q=80&w=800",
        specs: &["7.1 Surround Sound", "Noise Canceling Mic", "Memory Foam Pads"],
        rating: 4.7,
        is_new: false,
    },
    Product {
        id: "5",
        name: "RTX 5090 DULA Edition",
        category: Category::Components,
        price: 645_000.00,
        description: "Maximum performance for 4K ray-traced gaming and creative workloads.",
        image: "https://images.unsplash.com/photo-1591488320449-011701bb6704?auto=format&fit=crop&q=80&w=800",
        specs: &["32GB GDDR7", "Triple Fan Cooling", "DLSS 4.5 Support"],
        rating: 5.0,
        is_new: false,
    },
    Product {
        id: "6",
        name: "DULA FF Throne Series",
        category: Category::Furniture,
        price: 105_000.00,
        description: "Premium ergonomic gaming chair designed for long sessions with spine support.",
        image: "https://images.unsplash.com/photo-1598550476439-6847785fce66?auto=format&fit=crop&q=80&w=800",
        specs: &["4D Armrests", "Premium PU Leather", "180° Recline"],
        rating: 4.6,
        is_new: false,
    },
];

/// Formats a rupee amount with Indian digit grouping (e.g. `₹1,54,000.00`).
///
/// Indian grouping separates the last three integer digits, then pairs:
/// lakhs and crores rather than thousands and millions.
pub fn format_inr(amount: f64) -> String {
    let fixed = format!("{amount:.2}");
    let (integer, decimals) = fixed.split_once('.').unwrap_or((fixed.as_str(), "00"));

    let digits: Vec<char> = integer.chars().collect();
    let mut grouped = String::new();
    for (i, digit) in digits.iter().enumerate() {
        if i > 0 {
            let remaining = digits.len() - i;
            if remaining == 3 || (remaining > 3 && (remaining - 3) % 2 == 0) {
                grouped.push(',');
            }
        }
        grouped.push(*digit);
    }

    format!("₹{grouped}.{decimals}")
}

/// One line per product, for splicing into the system instruction.
pub fn lineup_summary() -> String {
    PRODUCTS
        .iter()
        .map(|p| {
            format!(
                "- {} ({}) — {}{}: {}",
                p.name,
                p.category,
                format_inr(p.price),
                if p.is_new { " [NEW]" } else { "" },
                p.description
            )
        })
        .collect::<Vec<_>>()
        .join("\n")
}
