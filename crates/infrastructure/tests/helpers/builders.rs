#![allow(dead_code)]
use argent_dns_domain::{
    DomainName, Header, Message, Question, RData, ResourceRecord, CLASS_IN, QCLASS_IN, QTYPE_A,
    TYPE_A,
};
use std::net::Ipv4Addr;

pub fn a_question(domain: &str) -> Question {
    Question::new(domain.parse().unwrap(), QTYPE_A, QCLASS_IN)
}

pub fn a_record(domain: &str, address: [u8; 4], ttl: u32, created_at: u64) -> ResourceRecord {
    ResourceRecord::new(
        domain.parse::<DomainName>().unwrap(),
        TYPE_A,
        CLASS_IN,
        ttl,
        RData::Ipv4(Ipv4Addr::from(address)),
        created_at,
    )
}

pub fn query_message(id: u16, domain: &str) -> Message {
    Message {
        wire: Vec::new(),
        header: Header {
            id,
            rd: true,
            qdcount: 1,
            ..Header::default()
        },
        questions: vec![a_question(domain)],
        answers: Vec::new(),
        authority: Vec::new(),
        additional: Vec::new(),
    }
}
