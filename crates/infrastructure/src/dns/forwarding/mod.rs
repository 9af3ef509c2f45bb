mod upstream;

pub use upstream::UdpUpstream;
