//! Builders for hand-assembled binarycookies buffers.
#![allow(dead_code)]

/// Field values for one cookie record.
#[derive(Debug, Clone)]
pub struct CookieFixture {
    pub flags: i32,
    pub domain: String,
    pub name: String,
    pub path: String,
    pub value: String,
    pub expires: f64,
    pub created: f64,
}

impl CookieFixture {
    pub fn new(domain: &str, name: &str, path: &str, value: &str) -> Self {
        Self {
            flags: 0,
            domain: domain.to_string(),
            name: name.to_string(),
            path: path.to_string(),
            value: value.to_string(),
            expires: 0.0,
            created: 0.0,
        }
    }

    pub fn flags(mut self, flags: i32) -> Self {
        self.flags = flags;
        self
    }

    pub fn dates(mut self, expires: f64, created: f64) -> Self {
        self.expires = expires;
        self.created = created;
        self
    }

    /// On-disk record: length prefix, fixed header, strings.
    ///
    /// Field offsets and the stored length count from the start of the prefix.
    pub fn encode(&self) -> Vec<u8> {
        let mut strings = Vec::new();
        let mut offsets = [0i32; 4];
        for (i, s) in [&self.domain, &self.name, &self.path, &self.value]
            .iter()
            .enumerate()
        {
            offsets[i] = (56 + strings.len()) as i32;
            strings.extend_from_slice(s.as_bytes());
            strings.push(0);
        }

        let mut rec = Vec::new();
        rec.extend_from_slice(&((56 + strings.len()) as i32).to_le_bytes());
        rec.extend_from_slice(&[0u8; 4]);
        rec.extend_from_slice(&self.flags.to_le_bytes());
        rec.extend_from_slice(&[0u8; 4]);
        for o in offsets {
            rec.extend_from_slice(&o.to_le_bytes());
        }
        rec.extend_from_slice(&[0u8; 8]);
        rec.extend_from_slice(&self.expires.to_le_bytes());
        rec.extend_from_slice(&self.created.to_le_bytes());
        rec.extend_from_slice(&strings);
        rec
    }
}

/// Page bytes: header, count, offsets, footer, records.
pub fn encode_page(cookies: &[CookieFixture]) -> Vec<u8> {
    let records: Vec<Vec<u8>> = cookies.iter().map(CookieFixture::encode).collect();
    let mut pos = 4 + 4 + 4 * records.len() + 4;

    let mut page = Vec::new();
    page.extend_from_slice(&[0x00, 0x00, 0x01, 0x00]);
    page.extend_from_slice(&(records.len() as i32).to_le_bytes());
    for r in &records {
        page.extend_from_slice(&(pos as i32).to_le_bytes());
        pos += r.len();
    }
    page.extend_from_slice(&[0u8; 4]);
    for r in &records {
        page.extend_from_slice(r);
    }
    page
}

/// Whole container from already-encoded pages, with an 8-byte trailer.
pub fn encode_container(pages: &[Vec<u8>]) -> Vec<u8> {
    let mut data = Vec::new();
    data.extend_from_slice(b"cook");
    data.extend_from_slice(&(pages.len() as i32).to_be_bytes());
    for p in pages {
        data.extend_from_slice(&(p.len() as i32).to_be_bytes());
    }
    for p in pages {
        data.extend_from_slice(p);
    }
    // Checksum and footer, ignored by the decoder
    data.extend_from_slice(&[0u8, 0, 0, 0, 0x07, 0x17, 0x20, 0x05]);
    data
}

pub fn container_of(pages: &[Vec<CookieFixture>]) -> Vec<u8> {
    let encoded: Vec<Vec<u8>> = pages.iter().map(|p| encode_page(p)).collect();
    encode_container(&encoded)
}
