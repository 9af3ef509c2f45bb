#![allow(dead_code)]
use argent_dns_application::ports::{AnswerCache, UpstreamResolver};
use argent_dns_domain::{
    DomainName, DomainError, Header, Message, Question, RData, ResourceRecord, CLASS_IN, QCLASS_IN,
    QTYPE_A, TYPE_A,
};
use async_trait::async_trait;
use std::net::Ipv4Addr;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Mutex;

pub fn a_question(domain: &str) -> Question {
    Question::new(domain.parse().unwrap(), QTYPE_A, QCLASS_IN)
}

pub fn a_record(domain: &str, address: [u8; 4], ttl: u32) -> ResourceRecord {
    ResourceRecord::new(
        domain.parse::<DomainName>().unwrap(),
        TYPE_A,
        CLASS_IN,
        ttl,
        RData::Ipv4(Ipv4Addr::from(address)),
        0,
    )
}

pub fn query_message(id: u16, question: Question) -> Message {
    Message {
        wire: Vec::new(),
        header: Header {
            id,
            rd: true,
            qdcount: 1,
            ..Header::default()
        },
        questions: vec![question],
        answers: Vec::new(),
        authority: Vec::new(),
        additional: Vec::new(),
    }
}

pub fn reply_message(request: &Message, answers: Vec<ResourceRecord>, rcode: u8) -> Message {
    Message {
        wire: Vec::new(),
        header: Header {
            id: request.header.id,
            qr: true,
            rd: true,
            ra: true,
            rcode,
            qdcount: request.questions.len() as u16,
            ancount: answers.len() as u16,
            ..Header::default()
        },
        questions: request.questions.clone(),
        answers,
        authority: Vec::new(),
        additional: Vec::new(),
    }
}

#[derive(Default)]
pub struct MockCache {
    fresh_entry: Mutex<Option<(Question, ResourceRecord)>>,
    pub puts: Mutex<Vec<(Question, ResourceRecord)>>,
}

impl MockCache {
    pub fn empty() -> Self {
        Self::default()
    }

    pub fn with_fresh(question: Question, record: ResourceRecord) -> Self {
        Self {
            fresh_entry: Mutex::new(Some((question, record))),
            puts: Mutex::new(Vec::new()),
        }
    }

    pub fn put_count(&self) -> usize {
        self.puts.lock().unwrap().len()
    }
}

impl AnswerCache for MockCache {
    fn has_fresh(&self, question: &Question) -> bool {
        matches!(&*self.fresh_entry.lock().unwrap(), Some((q, _)) if q == question)
    }

    fn get(&self, question: &Question) -> Option<ResourceRecord> {
        match &*self.fresh_entry.lock().unwrap() {
            Some((q, record)) if q == question => Some(record.clone()),
            _ => None,
        }
    }

    fn put(&self, question: Question, answer: ResourceRecord) {
        self.puts.lock().unwrap().push((question, answer));
    }
}

pub struct MockUpstream {
    reply: Mutex<Result<Message, DomainError>>,
    pub calls: AtomicUsize,
}

impl MockUpstream {
    pub fn replying(reply: Message) -> Self {
        Self {
            reply: Mutex::new(Ok(reply)),
            calls: AtomicUsize::new(0),
        }
    }

    pub fn failing(error: DomainError) -> Self {
        Self {
            reply: Mutex::new(Err(error)),
            calls: AtomicUsize::new(0),
        }
    }

    pub fn call_count(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl UpstreamResolver for MockUpstream {
    async fn forward(&self, _request: &Message) -> Result<Message, DomainError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        self.reply.lock().unwrap().clone()
    }
}
