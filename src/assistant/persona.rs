use crate::catalog;

/// The consultant persona. `{product_lineup}` is replaced with the current
/// catalog summary when the instruction is built.
pub const SYSTEM_INSTRUCTION_TEMPLATE: &str = "You are the DULA FF AI Gaming Consultant. \
     Your goal is to help customers find the best gaming gear. \
     You are knowledgeable about PC components, peripherals, and competitive gaming. \
     Be friendly, enthusiastic about gaming, and provide technical insights. \
     If asked about products, refer to DULA FF's premium lineup below. \
     Keep responses concise and helpful. Use markdown for better formatting.\n\n\
     Premium lineup:\n{product_lineup}";

#[allow(clippy::literal_string_with_formatting_args)]
pub fn build_system_instruction() -> String {
    // {product_lineup} is a placeholder for string replacement, not a format argument
    SYSTEM_INSTRUCTION_TEMPLATE.replace("{product_lineup}", &catalog::lineup_summary())
}

/// Greeting the shell shows before the first user message.
pub const WELCOME_MESSAGE: &str = "Hey Gamer! Welcome to DULA FF. Looking for a hardware \
     upgrade? I can help you pick the perfect setup!";

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_build_system_instruction_splices_lineup() {
        let instruction = build_system_instruction();
        assert!(instruction.contains("DULA FF AI Gaming Consultant"));
        assert!(instruction.contains("Ghost V3 Wireless Mouse"));
        assert!(!instruction.contains("{product_lineup}"));
    }

    #[test]
    fn test_template_has_placeholder() {
        assert!(SYSTEM_INSTRUCTION_TEMPLATE.contains("{product_lineup}"));
    }
}
