//! End-to-end wallet lifecycle tests over the NEP-6 file format.

use neo3_crypto::{verify_signature, ECKeyPair, SignatureData};
use neo3_script::{InvocationScript, VerificationScript, Witness};
use neo3_wallet::{Account, ScryptParams, Wallet, WalletResult};

fn temp_wallet_path(dir: &tempfile::TempDir) -> std::path::PathBuf {
    dir.path().join("wallet.json")
}

#[test]
fn wallet_imports_encrypts_and_signs() -> WalletResult<()> {
    let key_pair = ECKeyPair::generate();
    let wif = key_pair.export_as_wif();

    let account = Account::from_wif(&wif)?;
    let script_hash = account.script_hash();
    let mut wallet =
        Wallet::with_accounts(vec![account])?.with_scrypt_params(ScryptParams::light());

    // Sign while the key is plaintext.
    let payload = b"wallet signing payload";
    let signing_account = wallet.get_account(&script_hash).expect("account added");
    let signature =
        neo3_crypto::sign_message(payload, signing_account.key_pair().expect("plaintext"))?;
    assert!(verify_signature(payload, &signature, key_pair.public_key()));

    // Encrypt, persist, reload, decrypt: the same key comes back.
    wallet.encrypt_all_accounts("wallet password")?;
    let dir = tempfile::tempdir().expect("temp dir");
    let path = temp_wallet_path(&dir);
    wallet.save(&path)?;

    let mut reloaded = Wallet::load(&path)?;
    reloaded.decrypt_all_accounts("wallet password")?;
    let restored = reloaded.get_account(&script_hash).expect("still a member");
    assert_eq!(
        restored.key_pair().expect("decrypted").export_as_wif(),
        wif
    );
    Ok(())
}

#[test]
fn wallet_file_round_trip_preserves_the_document() -> WalletResult<()> {
    let mut wallet = Wallet::with_accounts(vec![Account::create(), Account::create()])?
        .with_name("round-trip")
        .with_scrypt_params(ScryptParams::light());
    wallet.encrypt_all_accounts("pw")?;

    let dir = tempfile::tempdir().expect("temp dir");
    let path = temp_wallet_path(&dir);
    wallet.save(&path)?;

    let first_pass = std::fs::read_to_string(&path).expect("file written");
    Wallet::load(&path)?.save(&path)?;
    let second_pass = std::fs::read_to_string(&path).expect("file rewritten");
    assert_eq!(first_pass, second_pass);
    Ok(())
}

#[test]
fn multi_sig_account_witness_flow() -> WalletResult<()> {
    let signers: Vec<ECKeyPair> = (0..3).map(|_| ECKeyPair::generate()).collect();
    let keys: Vec<_> = signers.iter().map(|s| s.public_key().clone()).collect();

    let account = Account::create_multi_sig(&keys, 2)?;
    let verification = account.verification_script().expect("script set").clone();
    assert_eq!(verification.signing_threshold()?, 2);
    assert_eq!(verification.public_keys()?, keys);

    // Two of the three designated signers authorize a message.
    let message = b"multi-sig payload";
    let signatures: Vec<SignatureData> = signers[..2]
        .iter()
        .map(|signer| neo3_crypto::sign_message(message, signer))
        .collect::<Result<_, _>>()?;
    let witness = Witness::new(
        InvocationScript::from_signatures(&signatures),
        verification,
    );
    assert_eq!(witness.script_hash(), account.script_hash());
    assert_eq!(witness.invocation_script().script().len(), 2 * 66);
    Ok(())
}

#[test]
fn external_verification_script_classifies_like_local_one() -> WalletResult<()> {
    let wallet = Wallet::create();
    let account = wallet.default_account().expect("default set");
    let local = account.verification_script().expect("script set");

    // Round trip through raw bytes, as if loaded from a wallet file.
    let external = VerificationScript::from_bytes(local.script().to_vec());
    assert!(external.is_single_sig());
    assert_eq!(external.hash(), account.script_hash());

    let rebuilt = Account::from_verification_script(external);
    assert_eq!(rebuilt.address(), account.address());
    Ok(())
}
