/// Display-only text tables. Switching language never touches the data model,
/// it only changes which table the renderer reads from.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Language {
    English,
    Vietnamese
}

impl Language {
    pub fn from_code(code: &str) -> Language {
        match code {
            "en" => Language::English,
            _ => Language::Vietnamese
        }
    }

    pub fn code(&self) -> &'static str {
        match self {
            Language::English => "en",
            Language::Vietnamese => "vi"
        }
    }

    pub fn toggled(&self) -> Language {
        match self {
            Language::English => Language::Vietnamese,
            Language::Vietnamese => Language::English
        }
    }
}

pub struct TextTable {
    pub title: &'static str,
    pub subtitle: &'static str,
    pub add_prompt: &'static str,
    pub save_prompt: &'static str,
    pub options_title: &'static str,
    pub no_options: &'static str,
    pub saved_lists_title: &'static str,
    pub saved_none: &'static str,
    pub result_text: &'static str,
    pub usage: &'static str,
    pub confirm_reset: &'static str,
    pub toast_empty_input: &'static str,
    pub toast_duplicate: &'static str,
    pub toast_empty_list: &'static str,
    pub toast_no_valid: &'static str,
    pub toast_min_options: &'static str,
    pub toast_no_result: &'static str,
    pub toast_copied: &'static str,
    pub toast_copy_failed: &'static str,
    pub toast_list_saved: &'static str,
    pub toast_list_loaded: &'static str,
    pub toast_list_missing: &'static str,
    pub toast_name_required: &'static str,
    pub toast_nothing_to_save: &'static str,
    pub toast_sound_on: &'static str,
    pub toast_sound_off: &'static str,
    toast_added: &'static str,
    toast_skipped: &'static str,
    confirm_delete_list: &'static str
}

static ENGLISH: TextTable = TextTable {
    title: "What to eat today?",
    subtitle: "Your quick decision assistant",
    add_prompt: "Option: ",
    save_prompt: "List name: ",
    options_title: "Options",
    no_options: "No options yet. Add some!",
    saved_lists_title: "Saved Lists",
    saved_none: "No saved lists",
    result_text: "Selected result:",
    usage: "Enter add | F2 add all | F3 choose | F4 copy | F5 save | F6 reset | F7 language | F8 sound | Tab focus | Esc quit",
    confirm_reset: "Are you sure you want to reset all options?",
    toast_empty_input: "Please enter an option!",
    toast_duplicate: "This option already exists!",
    toast_empty_list: "Please enter a list to add!",
    toast_no_valid: "No valid items to add.",
    toast_min_options: "At least 2 options are required!",
    toast_no_result: "No result to copy.",
    toast_copied: "Result copied!",
    toast_copy_failed: "Unable to copy.",
    toast_list_saved: "List saved!",
    toast_list_loaded: "List loaded!",
    toast_list_missing: "No such saved list.",
    toast_name_required: "Please enter a list name!",
    toast_nothing_to_save: "Nothing to save yet.",
    toast_sound_on: "Sound on",
    toast_sound_off: "Sound off",
    toast_added: "Added {count} items{skippedCount}",
    toast_skipped: "{count} skipped",
    confirm_delete_list: "Delete list \"{name}\"?"
};

static VIETNAMESE: TextTable = TextTable {
    title: "Hôm nay ăn gì?",
    subtitle: "Trợ thủ quyết định nhanh chóng của bạn",
    add_prompt: "Lựa chọn: ",
    save_prompt: "Tên danh sách: ",
    options_title: "Danh sách lựa chọn",
    no_options: "Chưa có lựa chọn nào. Hãy thêm một vài tùy chọn!",
    saved_lists_title: "Danh sách đã lưu",
    saved_none: "Chưa lưu danh sách nào",
    result_text: "Kết quả được chọn:",
    usage: "Enter thêm | F2 thêm tất cả | F3 chọn | F4 sao chép | F5 lưu | F6 xóa hết | F7 ngôn ngữ | F8 âm thanh | Tab chuyển | Esc thoát",
    confirm_reset: "Bạn có chắc muốn xóa hết các lựa chọn?",
    toast_empty_input: "Vui lòng nhập một lựa chọn!",
    toast_duplicate: "Lựa chọn này đã tồn tại!",
    toast_empty_list: "Vui lòng nhập danh sách để thêm!",
    toast_no_valid: "Không có mục hợp lệ để thêm.",
    toast_min_options: "Cần ít nhất 2 lựa chọn!",
    toast_no_result: "Không có kết quả để sao chép.",
    toast_copied: "Đã sao chép kết quả!",
    toast_copy_failed: "Không thể sao chép.",
    toast_list_saved: "Đã lưu danh sách!",
    toast_list_loaded: "Đã tải danh sách!",
    toast_list_missing: "Không tìm thấy danh sách!",
    toast_name_required: "Vui lòng nhập tên danh sách!",
    toast_nothing_to_save: "Chưa có gì để lưu.",
    toast_sound_on: "Đã bật âm thanh",
    toast_sound_off: "Đã tắt âm thanh",
    toast_added: "Đã thêm {count} mục{skippedCount}",
    toast_skipped: "{count} bị bỏ qua",
    confirm_delete_list: "Xóa danh sách \"{name}\"?"
};

pub fn text_table(language: Language) -> &'static TextTable {
    match language {
        Language::English => &ENGLISH,
        Language::Vietnamese => &VIETNAMESE
    }
}

/// Composes the add-all outcome message, appending the skipped-count fragment
/// only when something was actually skipped.
pub fn toast_added(language: Language, added: usize, skipped: usize) -> String {
    let texts = text_table(language);
    let skipped_text = if skipped > 0 {
        format!(", {}", texts.toast_skipped.replace("{count}", &skipped.to_string()))
    } else {
        String::new()
    };
    texts.toast_added
        .replace("{count}", &added.to_string())
        .replace("{skippedCount}", &skipped_text)
}

pub fn confirm_delete_list(language: Language, name: &str) -> String {
    text_table(language).confirm_delete_list.replace("{name}", name)
}
