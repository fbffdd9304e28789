pub mod http;
pub mod resqx;
