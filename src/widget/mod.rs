pub mod text_widget;

pub trait Focusable {
    fn focus(&mut self);
    fn unfocus(&mut self);
}

/// Pads input out to the widget's full display length.
pub fn build_buffer(length: i8, input: &str) -> String {
    let mut buffer = String::from(input);
    let mut char_count = buffer.chars().count();
    while char_count < length as usize {
        buffer.push(' ');
        char_count += 1;
    }
    buffer
}

#[cfg(test)]
mod tests {
    use crate::widget::build_buffer;

    #[test]
    fn test_build_buffer_pads_to_length() {
        // GIVEN input shorter than the widget
        // WHEN we build the display buffer
        let buffer = build_buffer(8, "Pho");

        // THEN it is padded with spaces to the full length
        assert_eq!("Pho     ", buffer);
    }

    #[test]
    fn test_build_buffer_counts_chars_not_bytes() {
        // GIVEN multi-byte input
        let buffer = build_buffer(4, "Phở");

        // THEN padding is based on character count
        assert_eq!(4, buffer.chars().count());
    }
}
