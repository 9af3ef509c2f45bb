pub mod builders;
pub mod clock;
pub mod dns_server_mock;
