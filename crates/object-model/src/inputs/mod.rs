//! The built-in `Input.*` elements and their parsers.

pub mod choice_set;
pub mod date;
pub mod number;
pub mod text;
pub mod time;
pub mod toggle;

pub use self::choice_set::{Choice, ChoiceSetInput, ChoiceSetInputParser};
pub use self::date::{DateInput, DateInputParser};
pub use self::number::{NumberInput, NumberInputParser};
pub use self::text::{TextInput, TextInputParser};
pub use self::time::{TimeInput, TimeInputParser};
pub use self::toggle::{ToggleInput, ToggleInputParser};
