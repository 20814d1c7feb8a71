pub mod available;
pub mod doctor;
pub mod fetch;
pub mod platforms;
