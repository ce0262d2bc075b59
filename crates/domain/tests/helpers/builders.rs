#![allow(dead_code)]

/// Assembles raw response datagrams byte by byte so tests never depend on
/// the encoder they are checking.
pub struct ResponseBuilder {
    id: u16,
    flags: u16,
    qname: Vec<u8>,
    qtype: u16,
    answers: Vec<Vec<u8>>,
    nscount: u16,
    arcount: u16,
    trailing: Vec<u8>,
}

impl ResponseBuilder {
    pub fn new(domain: &str) -> Self {
        Self {
            id: 0x1234,
            flags: 0x8180,
            qname: encode_name(domain),
            qtype: 1,
            answers: Vec::new(),
            nscount: 0,
            arcount: 0,
            trailing: Vec::new(),
        }
    }

    pub fn id(mut self, id: u16) -> Self {
        self.id = id;
        self
    }

    pub fn flags(mut self, flags: u16) -> Self {
        self.flags = flags;
        self
    }

    pub fn qtype(mut self, qtype: u16) -> Self {
        self.qtype = qtype;
        self
    }

    /// A record whose owner is a pointer to the question name at offset 12.
    pub fn answer_a(self, octets: [u8; 4], ttl: u32) -> Self {
        self.answer_compressed(1, ttl, &octets)
    }

    pub fn answer_aaaa(self, octets: [u8; 16], ttl: u32) -> Self {
        self.answer_compressed(28, ttl, &octets)
    }

    pub fn answer_compressed(mut self, rtype: u16, ttl: u32, rdata: &[u8]) -> Self {
        let mut record = vec![0xc0, 0x0c];
        push_fixed(&mut record, rtype, ttl, rdata);
        self.answers.push(record);
        self
    }

    pub fn answer_named(mut self, name: &str, rtype: u16, ttl: u32, rdata: &[u8]) -> Self {
        let mut record = encode_name(name);
        push_fixed(&mut record, rtype, ttl, rdata);
        self.answers.push(record);
        self
    }

    pub fn nscount(mut self, count: u16) -> Self {
        self.nscount = count;
        self
    }

    pub fn arcount(mut self, count: u16) -> Self {
        self.arcount = count;
        self
    }

    /// Bytes appended after the answer section without being counted.
    pub fn trailing(mut self, bytes: &[u8]) -> Self {
        self.trailing.extend_from_slice(bytes);
        self
    }

    pub fn question_end(&self) -> usize {
        12 + self.qname.len() + 4
    }

    pub fn build(&self) -> Vec<u8> {
        let mut buf = Vec::with_capacity(512);
        buf.extend_from_slice(&self.id.to_be_bytes());
        buf.extend_from_slice(&self.flags.to_be_bytes());
        buf.extend_from_slice(&1u16.to_be_bytes());
        buf.extend_from_slice(&(self.answers.len() as u16).to_be_bytes());
        buf.extend_from_slice(&self.nscount.to_be_bytes());
        buf.extend_from_slice(&self.arcount.to_be_bytes());

        buf.extend_from_slice(&self.qname);
        buf.extend_from_slice(&self.qtype.to_be_bytes());
        buf.extend_from_slice(&[0x00, 0x01]);

        for answer in &self.answers {
            buf.extend_from_slice(answer);
        }
        buf.extend_from_slice(&self.trailing);
        buf
    }
}

pub fn encode_name(domain: &str) -> Vec<u8> {
    let mut out = Vec::new();
    for label in domain.split('.').filter(|l| !l.is_empty()) {
        out.push(label.len() as u8);
        out.extend_from_slice(label.as_bytes());
    }
    out.push(0x00);
    out
}

fn push_fixed(record: &mut Vec<u8>, rtype: u16, ttl: u32, rdata: &[u8]) {
    record.extend_from_slice(&rtype.to_be_bytes());
    record.extend_from_slice(&[0x00, 0x01]);
    record.extend_from_slice(&ttl.to_be_bytes());
    record.extend_from_slice(&(rdata.len() as u16).to_be_bytes());
    record.extend_from_slice(rdata);
}
