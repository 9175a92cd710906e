use console::Style;
use once_cell::sync::Lazy;

pub struct TaskzStyles {
    pub id: Style,
    pub pending_text: Style,
    pub completed_text: Style,
    pub placeholder: Style,
    pub filter_active: Style,
    pub filter_inactive: Style,
}

pub static TASKZ_STYLES: Lazy<TaskzStyles> = Lazy::new(|| TaskzStyles {
    id: Style::new().yellow(),
    pending_text: Style::new(),
    completed_text: Style::new().dim().strikethrough(),
    placeholder: Style::new().dim().italic(),
    filter_active: Style::new().bold().underlined(),
    filter_inactive: Style::new().dim(),
});
