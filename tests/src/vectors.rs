//! Known-answer vectors for key generation, signing and aggregation

/// Seed from the augmented-scheme regression vector
pub const AUG_SEED: [u8; 32] = [
    0, 50, 6, 244, 24, 199, 1, 25, 52, 88, 192, 19, 18, 12, 89, 6, 220, 18, 102, 58, 209, 82, 12,
    62, 89, 110, 182, 9, 44, 20, 254, 22,
];

/// `key_gen([0; 32])`
pub const SK1_HEX: &str = "4a353be3dac091a0a7e640620372f5e1e2e4401717c1e79cac6ffba8f6905604";

/// `key_gen([0; 32]).get_g1()`
pub const PK1_HEX: &str = "85695fcbc06cc4c4c9451f4dce21cbf8de3e5a13bf48f44cdbb18e2038ba7b8bb1632d7911ef1e2e08749bddbf165352";

/// Basic scheme, `sk1` over `[7, 8, 9]`
pub const SIG1_HEX: &str = "b8faa6d6a3881c9fdbad803b170d70ca5cbf1e6ba5a586262df368c75acd1d1ffa3ab6ee21c71f844494659878f5eb230c958dd576b08b8564aad2ee0992e85a1e565f299cd53a285de729937f70dc176a1f01432129bb2b94d3d5031f8065a1";

/// Basic scheme, `key_gen([1; 32])` over `[10, 11, 12]`
pub const SIG2_HEX: &str = "a9c4d3e689b82c7ec7e838dac2380cb014f9a08f6cd6ba044c263746e39a8f7a60ffee4afb78f146c2e421360784d58f0029491e3bd8ab84f0011d258471ba4e87059de295d9aba845c044ee83f6cf2411efd379ef38bf4cf41d5f3c0ae1205d";

/// Aggregate of `SIG1_HEX` and `SIG2_HEX`
pub const AGG_SIG1_HEX: &str = "aee003c8cdaf3531b6b0ca354031b0819f7586b5846796615aee8108fec75ef838d181f9d244a94d195d7b0231d4afcf06f27f0cc4d3c72162545c240de7d5034a7ef3a2a03c0159de982fbc2e7790aeb455e27beae91d64e077c70b5506dea3";

/// Aggregate of `sk1` over `[1, 2, 3]` and `[1, 2, 3, 4]`, and `sk2` over `[1, 2]`
pub const AGG_SIG2_HEX: &str = "a0b1378d518bea4d1100adbc7bdbc4ff64f2c219ed6395cd36fe5d2aa44a4b8e710b607afd965e505a5ac3283291b75413d09478ab4b5cfbafbeea366de2d0c0bcf61deddaa521f6020460fd547ab37659ae207968b545727beba0a3c5572b9c";

/// `pop_prove(key_gen([4; 32]))`
pub const POP_PROOF_HEX: &str = "84f709159435f0dc73b3e8bf6c78d85282d19231555a8ee3b6e2573aaf66872d9203fefa1ef700e34e7c3f3fb28210100558c6871c53f1ef6055b9f06b0d1abe22ad584ad3b957f3018a8f58227c6c716b1e15791459850f2289168fa0cf9115";

/// RFC 5869 test case 1
pub mod hkdf_case_1 {
    /// Input keying material
    pub const IKM: &str = "0b0b0b0b0b0b0b0b0b0b0b0b0b0b0b0b0b0b0b0b0b0b";
    /// Salt
    pub const SALT: &str = "000102030405060708090a0b0c";
    /// Info
    pub const INFO: &str = "f0f1f2f3f4f5f6f7f8f9";
    /// Output length
    pub const LENGTH: usize = 42;
    /// Expected output keying material
    pub const OKM: &str = "3cb25f25faacd57a90434f64d0362f2a2d2d0a90cf1a5a4c5db02d56ecc4c5bf34007208d5b887185865";
}

/// RFC 5869 test case 3 (empty salt and info)
pub mod hkdf_case_3 {
    /// Input keying material
    pub const IKM: &str = "0b0b0b0b0b0b0b0b0b0b0b0b0b0b0b0b0b0b0b0b0b0b";
    /// Output length
    pub const LENGTH: usize = 42;
    /// Expected output keying material
    pub const OKM: &str = "8da4e775a563c18f715f802a063c5a31b8a11f5c5ee1879ec3454e5f3c738d2d9d201395faa4b61a96c8";
}

/// RFC 9380 J.10.1, `BLS12381G2_XMD:SHA-256_SSWU_RO_`
pub mod hash_to_g2 {
    /// Domain separation tag
    pub const DST: &[u8] = b"QUUX-V01-CS02-with-BLS12381G2_XMD:SHA-256_SSWU_RO_";
    /// Message
    pub const MSG: &[u8] = b"abcdef0123456789";
    /// Expected affine x, real then imaginary part
    pub const X: (&str, &str) = (
        "0121982811d2491fde9ba7ed31ef9ca474f0e1501297f68c298e9f4c0028add35aea8bb83d53c08cfc007c1e005723cd0",
        "0190d119345b94fbd15497bcba94ecf7db2cbfd1e1fe7da034d26cbba169fb3968288b3fafb265f9ebd380512a71c3f2c",
    );
    /// Expected affine y, real then imaginary part
    pub const Y: (&str, &str) = (
        "05571a0f8d3c08d094576981f4a3b8eda0a8e771fcdcc8ecceaf1356a6acf17574518acb506e435b639353c2e14827c8",
        "0bb5e7572275c567462d91807de765611490205a941a5a6af3b1691bfe596c31225d3aabdf15faff860cb4ef17c7c3be",
    );
}
