pub mod agreement;
pub mod health;
pub mod instruments;
pub mod measures;
pub mod patients;
pub mod simulate;
