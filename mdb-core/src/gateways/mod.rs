pub mod email;
pub mod notify;
pub mod otp;
