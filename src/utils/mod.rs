pub mod phone;
pub mod random;
pub mod weak_pin;
