//! # Block Validation Flows
//!
//! The production service (`KeccakMerkleDigest` + `Secp256k1Verifier`) run
//! against blocks sealed with real secp256k1 keys.

#[cfg(test)]
mod tests {
    use crate::integration::fixtures::*;
    use ds_01_block_validation::{
        BlockValidationApi, BlockValidationError, BlockValidationService, CheckOutcome,
        DefaultBlockValidationService, KeccakMerkleDigest, KeyError, Secp256k1Verifier,
        ValidationConfig,
    };
    use shared_crypto::{keccak256, Secp256k1KeyPair};
    use shared_types::{Block, SignatureEntry, Transaction};
    use std::sync::Arc;

    fn service() -> DefaultBlockValidationService {
        BlockValidationService::new(KeccakMerkleDigest::new(), Secp256k1Verifier::new())
    }

    fn entry(pairs: &[(&str, String)]) -> SignatureEntry {
        pairs
            .iter()
            .map(|(index, sig)| (index.to_string(), sig.clone()))
            .collect()
    }

    // =========================================================================
    // HAPPY PATH
    // =========================================================================

    #[test]
    fn test_sealed_block_passes_both_checks() {
        let sealers = SealerSet::generate(4);
        let block = sealed_block(7, 5, &sealers);
        let service = service();

        assert!(service.validate_transaction_root(&block).unwrap());
        assert!(service.validate_sig_list(&block).unwrap());

        let report = service.validate_block(&block).unwrap();
        assert!(report.is_valid());
        assert_eq!(report.block_number, 7);
        assert_eq!(report.block_hash, block.hash);
        assert_eq!(report.transactions_root, CheckOutcome::Passed);
        assert_eq!(report.signatures, CheckOutcome::Passed);
        assert_eq!(report.signatures_checked, 4);
    }

    #[test]
    fn test_raw_and_uncompressed_keys_verify_alike() {
        let mut sealers = SealerSet::generate(2);
        let hash = keccak256(b"mixed encodings");

        for encodings in [
            [KeyEncoding::Raw, KeyEncoding::Raw],
            [KeyEncoding::Uncompressed, KeyEncoding::Uncompressed],
            [KeyEncoding::Raw, KeyEncoding::Uncompressed],
        ] {
            sealers.encodings = encodings.to_vec();
            let mut block = sealed_block(3, 1, &sealers);
            block.hash = hash;
            block.sig_list = sealers.sig_list(&hash);

            assert!(
                service().validate_sig_list(&block).unwrap(),
                "encodings {encodings:?} must verify"
            );
        }
    }

    #[test]
    fn test_empty_transaction_list_roots_to_sentinel() {
        let sealers = SealerSet::generate(1);
        let block = sealed_block(2, 0, &sealers);

        assert!(block.transactions.is_empty());
        assert!(service().validate_transaction_root(&block).unwrap());
    }

    #[test]
    fn test_signatures_accept_prefix_and_uppercase() {
        let sealers = SealerSet::generate(2);
        let mut block = sealed_block(5, 2, &sealers);
        block.sig_list = vec![
            entry(&[("0", format!("0x{}", sealers.sign(0, &block.hash)))]),
            entry(&[("1", sealers.sign(1, &block.hash).to_uppercase())]),
        ];

        assert!(service().validate_sig_list(&block).unwrap());
    }

    #[test]
    fn test_entry_with_several_signers() {
        let sealers = SealerSet::generate(3);
        let mut block = sealed_block(9, 1, &sealers);
        block.sig_list = vec![entry(&[
            ("0", sealers.sign(0, &block.hash)),
            ("1", sealers.sign(1, &block.hash)),
            ("2", sealers.sign(2, &block.hash)),
        ])];

        let report = service().validate_block(&block).unwrap();
        assert_eq!(report.signatures, CheckOutcome::Passed);
        assert_eq!(report.signatures_checked, 3);
    }

    #[test]
    fn test_hex_sealer_index_beyond_nine() {
        let sealers = SealerSet::generate(12);
        let mut block = sealed_block(4, 1, &sealers);
        block.sig_list = vec![entry(&[("b", sealers.sign(11, &block.hash))])];

        assert!(service().validate_sig_list(&block).unwrap());
    }

    #[test]
    fn test_empty_sig_list_is_vacuously_valid() {
        let sealers = SealerSet::generate(2);
        let mut block = sealed_block(6, 1, &sealers);
        block.sig_list.clear();

        assert!(service().validate_sig_list(&block).unwrap());
    }

    // =========================================================================
    // REJECTIONS
    // =========================================================================

    #[test]
    fn test_tampered_transaction_fails_root_check() {
        let sealers = SealerSet::generate(2);
        let mut block = sealed_block(8, 3, &sealers);
        block.transactions[1] = Transaction::new(b"transfer #1 (forged)".to_vec());

        let report = service().validate_block(&block).unwrap();
        assert_eq!(report.transactions_root, CheckOutcome::Failed);
        assert_eq!(report.signatures, CheckOutcome::Passed);
        assert!(!report.is_valid());
    }

    #[test]
    fn test_reordered_transactions_fail_root_check() {
        let sealers = SealerSet::generate(1);
        let mut block = sealed_block(8, 4, &sealers);
        block.transactions.swap(0, 3);

        assert!(!service().validate_transaction_root(&block).unwrap());
    }

    #[test]
    fn test_genesis_skips_root_check() {
        let sealers = SealerSet::generate(2);
        let mut block = sealed_block(0, 3, &sealers);
        block.header.transactions_root = vec![0xde, 0xad];

        assert!(service().validate_transaction_root(&block).unwrap());
        assert!(service().validate_block(&block).unwrap().is_valid());
    }

    #[test]
    fn test_signature_from_wrong_sealer_fails() {
        let sealers = SealerSet::generate(2);
        let mut block = sealed_block(10, 1, &sealers);
        // Sealer 0 signed, but the entry claims sealer 1.
        block.sig_list = vec![entry(&[("1", sealers.sign(0, &block.hash))])];

        assert!(!service().validate_sig_list(&block).unwrap());
    }

    #[test]
    fn test_signature_from_outsider_fails() {
        let sealers = SealerSet::generate(2);
        let outsider = Secp256k1KeyPair::generate();
        let mut block = sealed_block(10, 1, &sealers);
        let forged = outsider.sign_prehash_hex(&block.hash).unwrap();
        block.sig_list.push(entry(&[("0", forged)]));

        let report = service().validate_block(&block).unwrap();
        assert_eq!(report.signatures, CheckOutcome::Failed);
        assert_eq!(report.signatures_checked, 3);
    }

    #[test]
    fn test_changed_block_hash_fails_every_signature() {
        let sealers = SealerSet::generate(3);
        let mut block = sealed_block(11, 2, &sealers);
        block.hash = keccak256(b"another block");

        let report = service().validate_block(&block).unwrap();
        assert_eq!(report.signatures, CheckOutcome::Failed);
        assert_eq!(report.signatures_checked, 1);
    }

    #[test]
    fn test_garbage_signature_is_invalid_not_error() {
        let sealers = SealerSet::generate(1);
        let mut block = sealed_block(12, 1, &sealers);
        block.sig_list = vec![entry(&[("0", "not-hex-at-all".to_string())])];

        assert!(!service().validate_sig_list(&block).unwrap());
    }

    // =========================================================================
    // CORRUPT BLOCK DATA
    // =========================================================================

    #[test]
    fn test_out_of_range_index_is_error() {
        let sealers = SealerSet::generate(2);
        let mut block = sealed_block(13, 1, &sealers);
        block.sig_list = vec![entry(&[("ff", sealers.sign(0, &block.hash))])];

        let err = service().validate_sig_list(&block).unwrap_err();
        assert!(err.is_structural());
        assert!(matches!(
            err,
            BlockValidationError::SealerIndexOutOfRange { sealer_count: 2, .. }
        ));
    }

    #[test]
    fn test_non_hex_index_is_error() {
        let sealers = SealerSet::generate(2);
        let mut block = sealed_block(13, 1, &sealers);
        block.sig_list = vec![entry(&[("zz", sealers.sign(0, &block.hash))])];

        let err = service().validate_sig_list(&block).unwrap_err();
        assert!(matches!(err, BlockValidationError::MalformedSealerIndex { .. }));
    }

    #[test]
    fn test_short_sealer_key_is_error() {
        let sealers = SealerSet::generate(2);
        let mut block = sealed_block(14, 1, &sealers);
        block.header.sealer_list[1].truncate(33);

        let err = service().validate_sig_list(&block).unwrap_err();
        assert!(matches!(
            err,
            BlockValidationError::MalformedSealerKey {
                index: 1,
                source: KeyError::UnsupportedLength(33),
            }
        ));
    }

    #[test]
    fn test_off_curve_sealer_key_is_structural() {
        let sealers = SealerSet::generate(2);
        let mut block = sealed_block(14, 1, &sealers);
        block.header.sealer_list[0] = vec![0x01; 64];

        let err = service().validate_sig_list(&block).unwrap_err();
        assert!(matches!(
            err,
            BlockValidationError::MalformedSealerKey {
                index: 0,
                source: KeyError::NotOnCurve,
            }
        ));
        assert!(err.is_structural());
        assert!(!err.is_dependency_fault());
    }

    // =========================================================================
    // CONFIGURATION & BATCHES
    // =========================================================================

    #[test]
    fn test_config_from_lookup_disables_signature_check() {
        let config = ValidationConfig::from_lookup(|key| match key {
            "DS_VERIFY_SIGNATURES" => Some("false".to_string()),
            _ => None,
        });
        let service = BlockValidationService::with_config(
            KeccakMerkleDigest::new(),
            Secp256k1Verifier::new(),
            config,
        );

        let sealers = SealerSet::generate(1);
        let mut block = sealed_block(15, 1, &sealers);
        block.sig_list = vec![entry(&[("0", "bad".to_string())])];

        let report = service.validate_block(&block).unwrap();
        assert_eq!(report.transactions_root, CheckOutcome::Passed);
        assert_eq!(report.signatures, CheckOutcome::Skipped);
        assert!(report.is_valid());
    }

    #[test]
    fn test_validate_blocks_keeps_input_order() {
        let sealers = SealerSet::generate(3);
        let mut blocks: Vec<Block> = (0..16).map(|n| sealed_block(n, 3, &sealers)).collect();
        blocks[5].transactions.pop();

        let results = service().validate_blocks(&blocks);
        assert_eq!(results.len(), blocks.len());

        for (n, result) in results.iter().enumerate() {
            let report = result.as_ref().unwrap();
            assert_eq!(report.block_number, n as u64);
            assert_eq!(report.is_valid(), n != 5, "block {n}");
        }
    }

    #[test]
    fn test_service_shared_across_threads() {
        let service = Arc::new(service());
        let sealers = Arc::new(SealerSet::generate(2));

        let handles: Vec<_> = (1..=4u64)
            .map(|n| {
                let service = Arc::clone(&service);
                let sealers = Arc::clone(&sealers);
                std::thread::spawn(move || {
                    let block = sealed_block(n, 2, &sealers);
                    service.validate_block(&block).unwrap().is_valid()
                })
            })
            .collect();

        for handle in handles {
            assert!(handle.join().unwrap());
        }
    }

    // =========================================================================
    // WIRE FORMAT
    // =========================================================================

    #[test]
    fn test_block_survives_json_transport() {
        let sealers = SealerSet::generate(3);
        let block = sealed_block(21, 4, &sealers);

        let json = serde_json::to_string(&block).unwrap();
        let decoded: Block = serde_json::from_str(&json).unwrap();

        assert_eq!(decoded, block);
        assert!(service().validate_block(&decoded).unwrap().is_valid());
    }
}
