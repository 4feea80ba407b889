use hickory_proto::rr::RecordType as HickoryRecordType;
use zonewarden_domain::RecordType;

pub struct RecordTypeMapper;

impl RecordTypeMapper {
    pub fn to_hickory(record_type: RecordType) -> HickoryRecordType {
        HickoryRecordType::from(record_type.to_u16())
    }

    /// `None` for types the diagnostics never look at.
    pub fn from_hickory(record_type: HickoryRecordType) -> Option<RecordType> {
        RecordType::from_u16(u16::from(record_type))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_known_types_map_both_ways() {
        for rt in [
            RecordType::A,
            RecordType::NS,
            RecordType::SOA,
            RecordType::SRV,
            RecordType::DNSKEY,
            RecordType::CAA,
            RecordType::AXFR,
        ] {
            let hickory = RecordTypeMapper::to_hickory(rt);
            assert_eq!(RecordTypeMapper::from_hickory(hickory), Some(rt));
        }
        assert_eq!(RecordTypeMapper::to_hickory(RecordType::DS), HickoryRecordType::DS);
    }

    #[test]
    fn test_unhandled_type_is_none() {
        assert_eq!(RecordTypeMapper::from_hickory(HickoryRecordType::NSEC3), None);
    }
}
