//! User-facing console lines, one template per outcome kind and language.
//!
//! The Vietnamese templates are the ones the tool has always printed; the
//! English set exists so the language is a setting rather than a constant.

use std::path::Path;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Language {
    #[default]
    Vietnamese,
    English,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MessageKind {
    InputMissing,
    InputMissingHint,
    InputVanished,
    Success,
    Failure,
}

/// Values substituted into a template. Fields a template does not use are ignored.
#[derive(Debug, Default)]
pub struct MessageArgs<'a> {
    pub input: Option<&'a Path>,
    pub output: Option<&'a Path>,
    pub detail: Option<&'a str>,
}

pub fn render(language: Language, kind: MessageKind, args: &MessageArgs<'_>) -> String {
    let input = display(args.input);
    let output = display(args.output);
    let detail = args.detail.unwrap_or_default();

    match (language, kind) {
        (Language::Vietnamese, MessageKind::InputMissing) => {
            format!("Lỗi: Không tìm thấy file Excel tại đường dẫn: {input}")
        }
        (Language::Vietnamese, MessageKind::InputMissingHint) => format!(
            "Cảnh báo: File Excel '{input}' không tồn tại. Vui lòng tạo file này hoặc đặt đúng đường dẫn."
        ),
        (Language::Vietnamese, MessageKind::InputVanished) => {
            format!("Lỗi: File Excel đầu vào không tìm thấy tại '{input}'.")
        }
        (Language::Vietnamese, MessageKind::Success) => format!(
            "Thành công: File Excel '{input}' đã được chuyển đổi thành CSV tại '{output}' với encoding UTF-8."
        ),
        (Language::Vietnamese, MessageKind::Failure) => {
            format!("Đã xảy ra lỗi trong quá trình chuyển đổi: {detail}")
        }
        (Language::English, MessageKind::InputMissing) => {
            format!("Error: Excel file not found at path: {input}")
        }
        (Language::English, MessageKind::InputMissingHint) => format!(
            "Warning: Excel file '{input}' does not exist. Please create it or fix the path."
        ),
        (Language::English, MessageKind::InputVanished) => {
            format!("Error: input Excel file not found at '{input}'.")
        }
        (Language::English, MessageKind::Success) => format!(
            "Success: Excel file '{input}' was converted to CSV at '{output}' with UTF-8 encoding."
        ),
        (Language::English, MessageKind::Failure) => {
            format!("An error occurred during conversion: {detail}")
        }
    }
}

fn display(path: Option<&Path>) -> String {
    path.map(|p| p.display().to_string()).unwrap_or_default()
}
