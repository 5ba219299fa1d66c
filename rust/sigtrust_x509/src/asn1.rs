// Copyright (c) Microsoft Corporation.
// Licensed under the MIT License.

//! Structural DER reading.
//!
//! Revocation responses and signed certificate envelopes are walked element by
//! element with `der`'s low-level reader. Every element keeps its raw encoding
//! so signed portions can be verified over the exact bytes that were received.

use crate::error::X509Error;
use chrono::{DateTime, Duration, NaiveDate, Utc};
use der::asn1::ObjectIdentifier;
use der::{Decode, Header, Reader, SliceReader, Tag};

/// One decoded tag-length-value element.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Tlv<'a> {
    pub tag: Tag,
    /// Content octets.
    pub value: &'a [u8],
    /// Full encoding, header included.
    pub raw: &'a [u8],
}

impl<'a> Tlv<'a> {
    /// Decodes exactly one element spanning all of `input`.
    pub fn parse(input: &'a [u8]) -> Result<Self, X509Error> {
        let mut reader = DerReader::new(input)?;
        let tlv = reader.next()?;
        reader.finish()?;
        Ok(tlv)
    }

    pub fn expect(self, tag: Tag) -> Result<Self, X509Error> {
        if self.tag == tag {
            Ok(self)
        } else {
            Err(X509Error::Der(format!("expected {tag}, found {}", self.tag)))
        }
    }

    /// Context-specific tag number, if this element carries one.
    pub fn context_number(&self) -> Option<u8> {
        match self.tag {
            Tag::ContextSpecific { number, .. } => Some(number.value()),
            _ => None,
        }
    }

    /// Reader over the content octets of a constructed element.
    pub fn children(self) -> Result<DerReader<'a>, X509Error> {
        if !self.tag.is_constructed() {
            return Err(X509Error::Der(format!("{} is not constructed", self.tag)));
        }
        DerReader::new(self.value)
    }

    /// Content of a SEQUENCE.
    pub fn sequence(self) -> Result<DerReader<'a>, X509Error> {
        self.expect(Tag::Sequence)?.children()
    }

    /// The single element wrapped by an EXPLICIT context tag.
    pub fn explicit(self) -> Result<Tlv<'a>, X509Error> {
        let mut inner = self.children()?;
        let tlv = inner.next()?;
        inner.finish()?;
        Ok(tlv)
    }

    pub fn oid(self) -> Result<ObjectIdentifier, X509Error> {
        let tlv = self.expect(Tag::ObjectIdentifier)?;
        ObjectIdentifier::from_bytes(tlv.value).map_err(|e| X509Error::Der(format!("bad OID: {e}")))
    }

    pub fn octet_string(self) -> Result<&'a [u8], X509Error> {
        Ok(self.expect(Tag::OctetString)?.value)
    }

    /// BIT STRING content without the unused-bits octet.
    pub fn bit_string(self) -> Result<&'a [u8], X509Error> {
        let value = self.expect(Tag::BitString)?.value;
        match value.split_first() {
            Some((0, bits)) => Ok(bits),
            Some((unused, _)) => Err(X509Error::Der(format!(
                "BIT STRING with {unused} unused bits is not a key or signature"
            ))),
            None => Err(X509Error::Der("empty BIT STRING".to_string())),
        }
    }

    pub fn boolean(self) -> Result<bool, X509Error> {
        match self.expect(Tag::Boolean)?.value {
            [0x00] => Ok(false),
            [0xFF] => Ok(true),
            other => Err(X509Error::Der(format!("bad BOOLEAN encoding {other:02X?}"))),
        }
    }

    /// INTEGER magnitude with sign-padding zeros removed.
    pub fn unsigned_integer(self) -> Result<&'a [u8], X509Error> {
        let value = self.expect(Tag::Integer)?.value;
        if value.is_empty() {
            return Err(X509Error::Der("empty INTEGER".to_string()));
        }
        Ok(strip_leading_zeros(value))
    }

    /// Small non-negative INTEGER or ENUMERATED value.
    pub fn small_uint(self) -> Result<u64, X509Error> {
        if self.tag != Tag::Integer && self.tag != Tag::Enumerated {
            return Err(X509Error::Der(format!("expected INTEGER, found {}", self.tag)));
        }
        if self.value.is_empty() || self.value[0] & 0x80 != 0 {
            return Err(X509Error::Der("negative or empty integer".to_string()));
        }
        let magnitude = strip_leading_zeros(self.value);
        if magnitude.len() > 8 {
            return Err(X509Error::Der("integer too large".to_string()));
        }
        Ok(magnitude.iter().fold(0u64, |acc, b| (acc << 8) | u64::from(*b)))
    }

    pub fn generalized_time(self) -> Result<DateTime<Utc>, X509Error> {
        parse_generalized_time(self.expect(Tag::GeneralizedTime)?.value)
    }
}

/// Sequential reader over a run of DER elements.
pub struct DerReader<'a> {
    input: &'a [u8],
    reader: SliceReader<'a>,
}

impl<'a> DerReader<'a> {
    pub fn new(input: &'a [u8]) -> Result<Self, X509Error> {
        Ok(Self {
            input,
            reader: SliceReader::new(input)?,
        })
    }

    pub fn is_empty(&self) -> bool {
        self.reader.is_finished()
    }

    pub fn peek_tag(&self) -> Result<Option<Tag>, X509Error> {
        if self.is_empty() {
            return Ok(None);
        }
        Ok(Some(self.reader.peek_tag()?))
    }

    pub fn next(&mut self) -> Result<Tlv<'a>, X509Error> {
        let start = usize::try_from(self.reader.position())?;
        let header = Header::decode(&mut self.reader)?;
        let value = self.reader.read_slice(header.length)?;
        let end = usize::try_from(self.reader.position())?;

        Ok(Tlv {
            tag: header.tag,
            value,
            raw: &self.input[start..end],
        })
    }

    /// Next element when it carries context tag `[number]`.
    pub fn next_if_context(&mut self, number: u8) -> Result<Option<Tlv<'a>>, X509Error> {
        match self.peek_tag()? {
            Some(Tag::ContextSpecific { number: n, .. }) if n.value() == number => {
                self.next().map(Some)
            }
            _ => Ok(None),
        }
    }

    pub fn next_if(&mut self, tag: Tag) -> Result<Option<Tlv<'a>>, X509Error> {
        if self.peek_tag()? == Some(tag) {
            self.next().map(Some)
        } else {
            Ok(None)
        }
    }

    pub fn finish(self) -> Result<(), X509Error> {
        if self.is_empty() {
            Ok(())
        } else {
            Err(X509Error::Der("trailing data after element".to_string()))
        }
    }
}

impl<'a> Iterator for DerReader<'a> {
    type Item = Result<Tlv<'a>, X509Error>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.is_empty() {
            None
        } else {
            Some(DerReader::next(self))
        }
    }
}

/// An AlgorithmIdentifier split into its OID and (optional) parameters element.
#[derive(Debug, Clone, Copy)]
pub struct AlgorithmIdentifier<'a> {
    pub oid: ObjectIdentifier,
    pub parameters: Option<Tlv<'a>>,
}

impl<'a> AlgorithmIdentifier<'a> {
    pub fn from_tlv(tlv: Tlv<'a>) -> Result<Self, X509Error> {
        let mut seq = tlv.sequence()?;
        let oid = seq.next()?.oid()?;
        let parameters = if seq.is_empty() {
            None
        } else {
            Some(seq.next()?)
        };
        seq.finish()?;
        Ok(Self { oid, parameters })
    }

    /// Parameters, treating an explicit NULL as absent.
    pub fn non_null_parameters(&self) -> Option<Tlv<'a>> {
        self.parameters.filter(|p| p.tag != Tag::Null)
    }
}

pub(crate) fn strip_leading_zeros(bytes: &[u8]) -> &[u8] {
    let first = bytes.iter().position(|b| *b != 0).unwrap_or(bytes.len().saturating_sub(1));
    &bytes[first..]
}

/// Parses `YYYYMMDDHHMMSS[.fff]Z`.
///
/// Fractional seconds are accepted even though DER forbids trailing zeros in
/// them; deployed OCSP responders emit them.
pub fn parse_generalized_time(value: &[u8]) -> Result<DateTime<Utc>, X509Error> {
    let bad = || X509Error::Der(format!("bad GeneralizedTime {:?}", String::from_utf8_lossy(value)));

    let text = std::str::from_utf8(value).map_err(|_| bad())?;
    let body = text.strip_suffix('Z').ok_or_else(bad)?;
    let (whole, fraction) = match body.split_once('.') {
        Some((whole, fraction)) => (whole, Some(fraction)),
        None => (body, None),
    };

    if whole.len() != 14 || !whole.bytes().all(|b| b.is_ascii_digit()) {
        return Err(bad());
    }
    let field = |range: std::ops::Range<usize>| whole[range].parse::<u32>().map_err(|_| bad());

    let year = i32::try_from(field(0..4)?).map_err(|_| bad())?;
    let time = NaiveDate::from_ymd_opt(year, field(4..6)?, field(6..8)?)
        .and_then(|d| d.and_hms_opt(field(8..10).ok()?, field(10..12).ok()?, field(12..14).ok()?))
        .ok_or_else(bad)?
        .and_utc();

    match fraction {
        None => Ok(time),
        Some(f) if !f.is_empty() && f.len() <= 9 && f.bytes().all(|b| b.is_ascii_digit()) => {
            let nanos: i64 = format!("{f:0<9}").parse().map_err(|_| bad())?;
            Ok(time + Duration::nanoseconds(nanos))
        }
        Some(_) => Err(bad()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{TimeZone, Timelike};

    #[test]
    fn generalized_time_with_and_without_fraction() {
        let plain = parse_generalized_time(b"20180213060530Z").unwrap();
        assert_eq!(plain, Utc.with_ymd_and_hms(2018, 2, 13, 6, 5, 30).unwrap());

        let fractional = parse_generalized_time(b"20180213062123.679Z").unwrap();
        assert_eq!(fractional.second(), 23);
        assert_eq!(fractional.nanosecond(), 679_000_000);
    }

    #[test]
    fn generalized_time_rejects_garbage() {
        for bad in [&b"20180213060530"[..], b"2018021306053Z", b"20181313060530Z", b"20180213060530.Z", b""] {
            assert!(parse_generalized_time(bad).is_err(), "{:?}", String::from_utf8_lossy(bad));
        }
    }

    #[test]
    fn reader_keeps_raw_encodings() {
        // SEQUENCE { INTEGER 5, OCTET STRING 'ab' }
        let der = [0x30, 0x07, 0x02, 0x01, 0x05, 0x04, 0x02, 0x61, 0x62];
        let outer = Tlv::parse(&der).unwrap();
        assert_eq!(outer.raw, &der[..]);

        let mut seq = outer.sequence().unwrap();
        let int = seq.next().unwrap();
        assert_eq!(int.raw, &der[2..5]);
        assert_eq!(int.small_uint().unwrap(), 5);
        assert_eq!(seq.next().unwrap().octet_string().unwrap(), b"ab");
        seq.finish().unwrap();
    }

    #[test]
    fn integer_magnitude_drops_sign_padding() {
        let der = [0x02, 0x03, 0x00, 0x80, 0x01];
        assert_eq!(Tlv::parse(&der).unwrap().unsigned_integer().unwrap(), &[0x80, 0x01]);
    }
}
