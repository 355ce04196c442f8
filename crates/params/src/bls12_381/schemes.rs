//! Domain separation tags and key generation constants

/// Ciphersuite for the basic scheme
pub const BASIC_SCHEME_DST: &[u8] = b"BLS_SIG_BLS12381G2_XMD:SHA-256_SSWU_RO_NUL_";

/// Ciphersuite for the message augmentation scheme
pub const AUG_SCHEME_DST: &[u8] = b"BLS_SIG_BLS12381G2_XMD:SHA-256_SSWU_RO_AUG_";

/// Ciphersuite for the proof of possession scheme
pub const POP_SCHEME_DST: &[u8] = b"BLS_SIG_BLS12381G2_XMD:SHA-256_SSWU_RO_POP_";

/// Ciphersuite for proofs of possession themselves
pub const POP_SCHEME_POP_DST: &[u8] = b"BLS_POP_BLS12381G2_XMD:SHA-256_SSWU_RO_POP_";

/// HKDF salt used by key generation
pub const KEYGEN_SALT: &[u8] = b"BLS-SIG-KEYGEN-SALT-";

/// Number of HKDF output bytes reduced into a private key
pub const KEYGEN_OKM_LENGTH: usize = 48;

/// Minimum seed length accepted by key generation
pub const KEYGEN_MIN_SEED_SIZE: usize = 32;
