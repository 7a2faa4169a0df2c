pub mod badge;
pub mod checkbox;
pub mod input;
pub mod select;
pub mod textarea;

pub use badge::Badge;
pub use checkbox::CheckboxField;
pub use input::TextField;
pub use select::SelectField;
pub use textarea::TextArea;
