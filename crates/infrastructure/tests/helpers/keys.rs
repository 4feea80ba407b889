use ring::rand::SystemRandom;
use ring::signature::{self, EcdsaKeyPair, Ed25519KeyPair, KeyPair};
use zonewarden_domain::{DnskeyData, RecordType, ResourceRecord, RrsigData};
use zonewarden_infrastructure::dns::dnssec::canonical::signed_data;

pub const NOW: u32 = 1_700_000_000;

pub enum TestSigner {
    Ed25519(Ed25519KeyPair),
    EcdsaP256(EcdsaKeyPair, SystemRandom),
}

impl TestSigner {
    pub fn ed25519() -> Self {
        Self::Ed25519(Ed25519KeyPair::from_seed_unchecked(&[7u8; 32]).unwrap())
    }

    pub fn ecdsa_p256() -> Self {
        let rng = SystemRandom::new();
        let pkcs8 =
            EcdsaKeyPair::generate_pkcs8(&signature::ECDSA_P256_SHA256_FIXED_SIGNING, &rng).unwrap();
        let pair = EcdsaKeyPair::from_pkcs8(
            &signature::ECDSA_P256_SHA256_FIXED_SIGNING,
            pkcs8.as_ref(),
            &rng,
        )
        .unwrap();
        Self::EcdsaP256(pair, rng)
    }

    pub fn dnskey(&self, flags: u16) -> DnskeyData {
        let (algorithm, public_key) = match self {
            Self::Ed25519(pair) => (15, pair.public_key().as_ref().to_vec()),
            // strip the SEC1 0x04 prefix
            Self::EcdsaP256(pair, _) => (13, pair.public_key().as_ref()[1..].to_vec()),
        };
        DnskeyData {
            flags,
            protocol: 3,
            algorithm,
            public_key,
        }
    }

    pub fn sign(
        &self,
        key: &DnskeyData,
        owner: &str,
        signer: &str,
        covered: RecordType,
        rrset: &[ResourceRecord],
    ) -> RrsigData {
        let mut rrsig = RrsigData {
            type_covered: covered,
            algorithm: key.algorithm,
            labels: zonewarden_domain::dns_name::label_count(owner) as u8,
            original_ttl: 3600,
            expiration: NOW + 86_400,
            inception: NOW - 86_400,
            key_tag: key.key_tag(),
            signer_name: signer.to_string(),
            signature: vec![],
        };
        let data = signed_data(&rrsig, owner, rrset).unwrap();
        rrsig.signature = match self {
            Self::Ed25519(pair) => pair.sign(&data).as_ref().to_vec(),
            Self::EcdsaP256(pair, rng) => pair.sign(rng, &data).unwrap().as_ref().to_vec(),
        };
        rrsig
    }
}
