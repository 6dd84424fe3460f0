pub mod location;
pub mod month_key;
pub mod observation;
pub mod variable;
