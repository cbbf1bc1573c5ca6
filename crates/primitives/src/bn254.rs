use alloy_sol_types::sol;

sol! {
    /// BN254 G1 point in affine coordinates.
    #[derive(Debug, Default, PartialEq, Eq)]
    struct G1Point {
        uint256 x;
        uint256 y;
    }

    /// BN254 G2 point. Coordinate limbs use the Ethereum precompile order:
    /// the imaginary component first, the real component second.
    #[derive(Debug, Default, PartialEq, Eq)]
    struct G2Point {
        uint256[2] x;
        uint256[2] y;
    }

    /// Operator authorization for AVS registration.
    #[derive(Debug, Default, PartialEq, Eq)]
    struct SignatureWithSaltAndExpiry {
        bytes signature;
        bytes32 salt;
        uint256 expiry;
    }
}
