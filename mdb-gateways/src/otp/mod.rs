pub use mdb_core::gateways::otp::OtpStore;

mod in_memory;
pub use in_memory::InMemoryOtpStore;

#[cfg(feature = "redis")]
mod redis_store;
#[cfg(feature = "redis")]
pub use redis_store::RedisOtpStore;
