//! Button construction helpers so prompts share styles.
use serenity::builder::CreateButton;
use serenity::model::application::ButtonStyle;

pub struct Btn;
impl Btn {
    pub fn success(id: impl Into<String>, label: &str) -> CreateButton {
        CreateButton::new(id.into())
            .label(label)
            .style(ButtonStyle::Success)
    }
    pub fn danger(id: impl Into<String>, label: &str) -> CreateButton {
        CreateButton::new(id.into())
            .label(label)
            .style(ButtonStyle::Danger)
    }
    pub fn secondary(id: impl Into<String>, label: &str) -> CreateButton {
        CreateButton::new(id.into())
            .label(label)
            .style(ButtonStyle::Secondary)
    }
}
