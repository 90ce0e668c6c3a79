mod choice_box;
mod spin_box;

pub use choice_box::ChoiceBox;
pub use spin_box::SpinBox;
