//! Conversion of hickory records into domain records.
//!
//! Plain types are read through hickory's typed accessors. DNSKEY, DS, RRSIG
//! and CAA are re-emitted to canonical wire bytes and decoded here, so the
//! domain keeps the exact RDATA the signatures were computed over.

use super::RecordTypeMapper;
use hickory_proto::rr::{RData, Record};
use hickory_proto::serialize::binary::{BinEncodable, BinEncoder};
use tracing::warn;
use zonewarden_domain::{
    DnskeyData, DomainError, DsData, RecordData, RecordType, ResourceRecord, RrsigData, SoaData,
};

/// `Ok(None)` for record types that are not modelled (NSEC, OPT, ...).
pub fn convert_record(record: &Record) -> Result<Option<ResourceRecord>, DomainError> {
    let Some(record_type) = RecordTypeMapper::from_hickory(record.record_type()) else {
        return Ok(None);
    };
    let Some(rdata) = record.data() else {
        return Ok(None);
    };

    let data = match (record_type, rdata) {
        (_, RData::A(a)) => RecordData::A(a.0),
        (_, RData::AAAA(aaaa)) => RecordData::Aaaa(aaaa.0),
        (_, RData::NS(ns)) => RecordData::Ns(ns.0.to_ascii()),
        (_, RData::CNAME(cname)) => RecordData::Cname(cname.0.to_ascii()),
        (_, RData::MX(mx)) => RecordData::Mx {
            preference: mx.preference(),
            exchange: mx.exchange().to_ascii(),
        },
        (_, RData::SOA(soa)) => RecordData::Soa(SoaData {
            mname: soa.mname().to_ascii(),
            rname: soa.rname().to_ascii(),
            serial: soa.serial(),
            refresh: soa.refresh() as u32,
            retry: soa.retry() as u32,
            expire: soa.expire() as u32,
            minimum: soa.minimum(),
        }),
        (_, RData::TXT(txt)) => RecordData::Txt(
            txt.txt_data()
                .iter()
                .map(|s| String::from_utf8_lossy(s).into_owned())
                .collect(),
        ),
        (_, RData::SRV(srv)) => RecordData::Srv {
            priority: srv.priority(),
            weight: srv.weight(),
            port: srv.port(),
            target: srv.target().to_ascii(),
        },
        (RecordType::DNSKEY, rdata) => RecordData::Dnskey(parse_dnskey(&emit_rdata(rdata)?)?),
        (RecordType::DS, rdata) => RecordData::Ds(parse_ds(&emit_rdata(rdata)?)?),
        (RecordType::RRSIG, rdata) => match parse_rrsig(&emit_rdata(rdata)?)? {
            Some(rrsig) => RecordData::Rrsig(rrsig),
            None => return Ok(None),
        },
        (RecordType::CAA, rdata) => parse_caa(&emit_rdata(rdata)?)?,
        (other, _) => {
            return Err(DomainError::InvalidDnsResponse(format!(
                "unexpected RDATA for {} record",
                other
            )))
        }
    };

    Ok(Some(ResourceRecord::new(
        record.name().to_ascii(),
        record.ttl(),
        data,
    )))
}

/// Records that cannot be converted are logged and dropped; they never fail
/// the rest of the message.
pub fn convert_records(records: &[Record]) -> Vec<ResourceRecord> {
    let mut converted = Vec::with_capacity(records.len());
    for record in records {
        match convert_record(record) {
            Ok(Some(rr)) => converted.push(rr),
            Ok(None) => {}
            Err(e) => warn!(
                name = %record.name(),
                record_type = %record.record_type(),
                error = %e,
                "Dropping undecodable record"
            ),
        }
    }
    converted
}

fn emit_rdata(rdata: &RData) -> Result<Vec<u8>, DomainError> {
    let mut buf = Vec::with_capacity(64);
    let mut encoder = BinEncoder::new(&mut buf);
    encoder.set_canonical_names(true);
    rdata
        .emit(&mut encoder)
        .map_err(|e| DomainError::InvalidDnsResponse(format!("failed to encode RDATA: {}", e)))?;
    Ok(buf)
}

fn truncated(what: &str) -> DomainError {
    DomainError::InvalidDnsResponse(format!("{} RDATA truncated", what))
}

/// flags(2) protocol(1) algorithm(1) public key
pub fn parse_dnskey(rdata: &[u8]) -> Result<DnskeyData, DomainError> {
    if rdata.len() < 4 {
        return Err(truncated("DNSKEY"));
    }
    Ok(DnskeyData {
        flags: u16::from_be_bytes([rdata[0], rdata[1]]),
        protocol: rdata[2],
        algorithm: rdata[3],
        public_key: rdata[4..].to_vec(),
    })
}

/// key tag(2) algorithm(1) digest type(1) digest
pub fn parse_ds(rdata: &[u8]) -> Result<DsData, DomainError> {
    if rdata.len() < 4 {
        return Err(truncated("DS"));
    }
    Ok(DsData {
        key_tag: u16::from_be_bytes([rdata[0], rdata[1]]),
        algorithm: rdata[2],
        digest_type: rdata[3],
        digest: rdata[4..].to_vec(),
    })
}

/// `Ok(None)` when the signature covers a type that is not modelled, such as
/// the NSEC/NSEC3 proofs in signed negative answers.
pub fn parse_rrsig(rdata: &[u8]) -> Result<Option<RrsigData>, DomainError> {
    if rdata.len() < 19 {
        return Err(truncated("RRSIG"));
    }

    let covered = u16::from_be_bytes([rdata[0], rdata[1]]);
    let Some(type_covered) = RecordType::from_u16(covered) else {
        return Ok(None);
    };
    let read_u32 = |at: usize| {
        u32::from_be_bytes([rdata[at], rdata[at + 1], rdata[at + 2], rdata[at + 3]])
    };

    let (signer_name, consumed) = parse_wire_name(&rdata[18..])?;

    Ok(Some(RrsigData {
        type_covered,
        algorithm: rdata[2],
        labels: rdata[3],
        original_ttl: read_u32(4),
        expiration: read_u32(8),
        inception: read_u32(12),
        key_tag: u16::from_be_bytes([rdata[16], rdata[17]]),
        signer_name,
        signature: rdata[18 + consumed..].to_vec(),
    }))
}

/// flags(1) tag length(1) tag value (RFC 8659 §4.1)
pub fn parse_caa(rdata: &[u8]) -> Result<RecordData, DomainError> {
    if rdata.len() < 2 {
        return Err(truncated("CAA"));
    }
    let tag_len = rdata[1] as usize;
    if rdata.len() < 2 + tag_len {
        return Err(truncated("CAA"));
    }
    Ok(RecordData::Caa {
        flags: rdata[0],
        tag: String::from_utf8_lossy(&rdata[2..2 + tag_len]).into_owned(),
        value: rdata[2 + tag_len..].to_vec(),
    })
}

/// Reads an uncompressed wire name; returns it lowercased with the number of
/// bytes consumed.
fn parse_wire_name(wire: &[u8]) -> Result<(String, usize), DomainError> {
    let mut labels = Vec::new();
    let mut pos = 0;

    loop {
        let len = *wire.get(pos).ok_or_else(|| truncated("name in"))? as usize;
        pos += 1;

        if len == 0 {
            break;
        }
        if len > 63 {
            return Err(DomainError::InvalidDnsResponse(
                "compressed or invalid label in RRSIG signer name".into(),
            ));
        }

        let label = wire.get(pos..pos + len).ok_or_else(|| truncated("name in"))?;
        labels.push(String::from_utf8_lossy(label).to_ascii_lowercase());
        pos += len;
    }

    if labels.is_empty() {
        return Ok((".".to_string(), pos));
    }
    Ok((format!("{}.", labels.join(".")), pos))
}
