//! End-to-end client lifecycle against a host wired with the mock verifier:
//! create, query, update, prove, freeze.

use ibc_client_mock::client_state::{MockClientState, MOCK_CLIENT_STATE_TYPE_URL};
use ibc_client_mock::consensus_state::{MockConsensusState, MOCK_CONSENSUS_STATE_TYPE_URL};
use ibc_client_mock::header::{MockHeader, MockMisbehaviour, MOCK_HEADER_TYPE_URL, MOCK_MISBEHAVIOUR_TYPE_URL};
use ibc_client_mock::proof::MockProof;
use ibc_client_mock::{MockClient, MOCK_CLIENT_TYPE};
use ibc_host_core::builder::HostBuilder;
use ibc_host_core::client::{ClientStatus, ClientUpdate};
use ibc_host_core::config::{ClientModuleConfig, HostConfig};
use ibc_host_core::error::HostError;
use ibc_host_core::host::Host;
use ibc_host_types::commitment::CommitmentPrefix;
use ibc_host_types::envelope;
use ibc_host_types::height::Height;
use ibc_host_types::path;
use ibc_proto::google::protobuf::Any;

fn mock_host() -> Host {
    HostBuilder::new()
        .register(MockClient::new())
        .unwrap()
        .build(&HostConfig {
            clients: vec![ClientModuleConfig {
                client_type: MOCK_CLIENT_TYPE.to_string(),
                enabled: true,
            }],
        })
        .unwrap()
}

fn client_state_any(height: Height) -> Any {
    envelope::pack(
        MOCK_CLIENT_STATE_TYPE_URL,
        &MockClientState {
            latest_height: height,
            frozen: false,
            trusting_period: 0,
        },
    )
    .unwrap()
}

fn consensus_state_any(timestamp: u64) -> Any {
    envelope::pack(
        MOCK_CONSENSUS_STATE_TYPE_URL,
        &MockConsensusState {
            timestamp,
            root: b"root".to_vec(),
            next_validators_hash: None,
        },
    )
    .unwrap()
}

fn header_any(height: Height, timestamp: u64, root: &[u8]) -> Any {
    envelope::pack(
        MOCK_HEADER_TYPE_URL,
        &MockHeader {
            height,
            timestamp,
            root: root.to_vec(),
        },
    )
    .unwrap()
}

#[test]
fn test_create_queries_and_recorded_commitments() {
    let mut host = mock_host();

    // First allocation takes sequence 0; the scenario client is the second.
    let first = host
        .create_client(
            MOCK_CLIENT_TYPE,
            &client_state_any(Height::new(0, 5)),
            &consensus_state_any(10),
        )
        .unwrap();
    assert_eq!("mock-0", first.as_str());

    let timestamp = 1_234_567_890;
    let client_id = host
        .create_client(
            MOCK_CLIENT_TYPE,
            &client_state_any(Height::new(0, 9999)),
            &consensus_state_any(timestamp),
        )
        .unwrap();
    assert_eq!("mock-1", client_id.as_str());

    assert_eq!(Some(Height::new(0, 9999)), host.latest_height(&client_id));
    assert_eq!(
        Some(timestamp),
        host.timestamp_at_height(&client_id, Height::new(0, 9999))
    );
    assert_eq!(None, host.timestamp_at_height(&client_id, Height::new(0, 1)));

    // Both commitments are queryable at their canonical paths.
    assert!(host.commitment(&path::client_state(&client_id)).is_some());
    assert!(host
        .commitment(&path::consensus_state(&client_id, &Height::new(0, 9999)))
        .is_some());
    assert!(host
        .commitment(&path::consensus_state(&client_id, &Height::new(0, 1)))
        .is_none());
}

#[test]
fn test_create_for_unregistered_type_fails() {
    let mut host = mock_host();
    assert_eq!(
        HostError::UnknownClientType {
            client_type: "tendermint".to_string()
        },
        host.create_client(
            "tendermint",
            &client_state_any(Height::new(0, 5)),
            &consensus_state_any(10),
        )
        .unwrap_err()
    );
}

#[test]
fn test_update_refreshes_commitments_and_latest_height() {
    let mut host = mock_host();
    let client_id = host
        .create_client(
            MOCK_CLIENT_TYPE,
            &client_state_any(Height::new(0, 5)),
            &consensus_state_any(10),
        )
        .unwrap();
    let commitment_before = host.commitment(&path::client_state(&client_id)).unwrap();

    let update = host
        .update_client(&client_id, &header_any(Height::new(0, 6), 20, b"root 6"))
        .unwrap();
    assert!(matches!(update, ClientUpdate::Updated { .. }));

    assert_eq!(Some(Height::new(0, 6)), host.latest_height(&client_id));
    // The client state commitment moved with the latest height.
    let commitment_after = host.commitment(&path::client_state(&client_id)).unwrap();
    assert_ne!(commitment_before, commitment_after);
    assert!(host
        .commitment(&path::consensus_state(&client_id, &Height::new(0, 6)))
        .is_some());
}

#[test]
fn test_proof_verification_through_host() {
    let mut host = mock_host();
    let client_id = host
        .create_client(
            MOCK_CLIENT_TYPE,
            &client_state_any(Height::new(0, 5)),
            &consensus_state_any(10),
        )
        .unwrap();

    let prefix = CommitmentPrefix::from(b"ibc".to_vec());
    let counterparty_path = "commitments/ports/transfer/channels/channel-0/sequences/1";
    let proof = serde_json::to_vec(&MockProof::membership(counterparty_path, b"packet data")).unwrap();

    assert!(host
        .verify_membership(
            &client_id,
            Height::new(0, 5),
            &proof,
            &prefix,
            counterparty_path,
            b"packet data",
        )
        .unwrap());
    assert!(!host
        .verify_non_membership(
            &client_id,
            Height::new(0, 5),
            &proof,
            &prefix,
            counterparty_path,
        )
        .unwrap());
}

#[test]
fn test_misbehaviour_freezes_client_but_keeps_it_queryable() {
    let mut host = mock_host();
    let client_id = host
        .create_client(
            MOCK_CLIENT_TYPE,
            &client_state_any(Height::new(0, 5)),
            &consensus_state_any(10),
        )
        .unwrap();

    let evidence = envelope::pack(
        MOCK_MISBEHAVIOUR_TYPE_URL,
        &MockMisbehaviour {
            header_1: MockHeader {
                height: Height::new(0, 7),
                timestamp: 20,
                root: b"root a".to_vec(),
            },
            header_2: MockHeader {
                height: Height::new(0, 7),
                timestamp: 20,
                root: b"root b".to_vec(),
            },
        },
    )
    .unwrap();

    let update = host.update_client(&client_id, &evidence).unwrap();
    assert!(matches!(update, ClientUpdate::Misbehaviour { .. }));
    assert_eq!(Some(ClientStatus::Frozen), host.client_status(&client_id));

    // Updates and verification refuse; state lookups still succeed and
    // reflect the frozen flag.
    assert!(matches!(
        host.update_client(&client_id, &header_any(Height::new(0, 8), 30, b"root 8"))
            .unwrap_err(),
        HostError::ClientFrozen { .. }
    ));
    let proof = serde_json::to_vec(&MockProof::non_membership("some/path")).unwrap();
    assert!(matches!(
        host.verify_non_membership(
            &client_id,
            Height::new(0, 5),
            &proof,
            &CommitmentPrefix::default(),
            "some/path",
        )
        .unwrap_err(),
        HostError::ClientFrozen { .. }
    ));
    let client_state: MockClientState =
        serde_json::from_slice(&host.client_state(&client_id).unwrap()).unwrap();
    assert!(client_state.frozen);
}

#[test]
fn test_sequence_counters_and_capabilities_through_host() {
    let mut host = mock_host();

    host.capabilities_mut()
        .claim("ports/transfer", "transfer-module")
        .unwrap();
    assert!(host.capabilities().authenticate("ports/transfer", "transfer-module"));

    assert_eq!(1, host.sequences_mut().next_sequence_send("transfer", "channel-0"));
    assert_eq!(2, host.sequences_mut().next_sequence_send("transfer", "channel-0"));
    assert_eq!(1, host.sequences().peek_recv("transfer", "channel-0"));

    // The packet layer records and clears its own commitments.
    let commitment_path = path::packet_commitment("transfer", "channel-0", 1);
    host.commitments_mut().set(&commitment_path, b"packet data");
    assert!(host.commitment(&commitment_path).is_some());
    host.commitments_mut().delete(&commitment_path);
    assert!(host.commitment(&commitment_path).is_none());
}
