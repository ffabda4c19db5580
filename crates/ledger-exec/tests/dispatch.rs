//! Message dispatch: the transfer sentinel, frame rollback, depth bounds,
//! builtin routing and the block-context surface.

use alloy_primitives::{address, b256, bytes, Address, Bytes, TxKind, U256};
use ledger_exec::{
    constants, test_utils::*, CallData, CallOutcome, ChainConfig, Executor, Ledger, Message,
    Payload, TxError,
};

const SENDER: Address = address!("1000000000000000000000000000000000000001");

fn call_message(to: Address, value: U256) -> Message {
    Message {
        sender: SENDER,
        to,
        value,
        data: CallData::empty(),
        code_address: to,
        is_create: false,
        depth: 0,
    }
}

#[test]
fn refused_transfer_is_a_success_with_no_effect() {
    let recipient = address!("2000000000000000000000000000000000000002");
    let mut ledger = MemoryLedger::default().with_balance(SENDER, U256::from(5));
    let config = ChainConfig::default();
    let interpreter = NullInterpreter;

    let mut executor = Executor::new(&mut ledger, &interpreter, &config);
    let outcome = executor.call_message(call_message(recipient, U256::from(50))).unwrap();

    // Success code, empty payload: distinct from an execution failure.
    assert_eq!(outcome, CallOutcome::no_effect());
    assert_ne!(outcome, CallOutcome::failure());
    assert_eq!(ledger.balance(SENDER), U256::from(5));
    assert_eq!(ledger.balance(recipient), U256::ZERO);
}

#[test]
fn failed_sub_call_rolls_back_only_its_own_frame() {
    let outer = address!("aaaa000000000000000000000000000000000001");
    let inner = address!("bbbb000000000000000000000000000000000002");
    let outer_code = bytes!("01");
    let inner_code = bytes!("02");
    let key = U256::from(1);

    let mut ledger = MemoryLedger::default()
        .with_balance(SENDER, U256::from(1))
        .with_code(outer, outer_code.clone())
        .with_code(inner, inner_code.clone());

    let config = ChainConfig::default();
    let interpreter = ScriptedInterpreter::new()
        .on_code(outer_code, move |host, msg| {
            // Mutation made before the sub-call must survive its failure.
            host.set_storage(msg.to, key, U256::from(42));
            let sub = Message {
                sender: msg.to,
                to: inner,
                value: U256::ZERO,
                data: CallData::empty(),
                code_address: inner,
                is_create: false,
                depth: 0,
            };
            let sub_outcome = host.call(sub)?;
            assert!(!sub_outcome.success);
            // The sub-frame's storage write is already undone here.
            assert_eq!(host.storage(inner, key), U256::ZERO);
            Ok(CallOutcome::output(Bytes::new()))
        })
        .on_code(inner_code, move |host, msg| {
            host.set_storage(msg.to, key, U256::from(7));
            Ok(CallOutcome::failure())
        });

    let mut executor = Executor::new(&mut ledger, &interpreter, &config);
    let outcome = executor.call_message(call_message(outer, U256::ZERO)).unwrap();

    assert!(outcome.success);
    assert_eq!(ledger.storage(outer, key), U256::from(42));
    assert_eq!(ledger.storage(inner, key), U256::ZERO);
}

#[test]
fn exceeding_the_depth_bound_is_fatal() {
    let contract = address!("cccc000000000000000000000000000000000003");
    let code = bytes!("03");

    let mut ledger = MemoryLedger::default()
        .with_balance(SENDER, U256::from(1))
        .with_code(contract, code.clone());

    let config = ChainConfig { max_call_depth: 4, ..Default::default() };
    let interpreter = ScriptedInterpreter::new().on_code(code, move |host, msg| {
        let again = Message {
            sender: msg.to,
            to: contract,
            value: U256::ZERO,
            data: CallData::empty(),
            code_address: contract,
            is_create: false,
            depth: 0,
        };
        // Recurse until the engine cuts us off.
        host.call(again)
    });

    let mut executor = Executor::new(&mut ledger, &interpreter, &config);
    let result = executor.call_message(call_message(contract, U256::ZERO));
    assert_eq!(result, Err(TxError::DepthLimit { limit: 4 }));
}

#[test]
fn builtins_are_routed_by_code_address() {
    let mut ledger = MemoryLedger::default().with_balance(SENDER, U256::from(1));
    let config = ChainConfig::default();
    let interpreter = NullInterpreter;

    let msg = Message {
        sender: SENDER,
        to: constants::IDENTITY_ADDRESS,
        value: U256::ZERO,
        data: CallData::whole(bytes!("00010203")),
        code_address: constants::IDENTITY_ADDRESS,
        is_create: false,
        depth: 0,
    };
    let mut executor = Executor::new(&mut ledger, &interpreter, &config);
    let outcome = executor.call_message(msg).unwrap();
    assert_eq!(outcome.payload, Payload::Output(bytes!("00010203")));
}

#[test]
fn identity_builtin_works_end_to_end() {
    let mut ledger = MemoryLedger::default().with_balance(SENDER, U256::from(1));
    let config = ChainConfig::default();
    let interpreter = NullInterpreter;

    let tx = signed_tx(
        SENDER,
        TxKind::Call(constants::IDENTITY_ADDRESS),
        U256::ZERO,
        0,
        bytes!("c0ffee"),
    );
    let mut executor = Executor::new(&mut ledger, &interpreter, &config);
    let outcome = executor.apply_transaction(&tx).unwrap();
    assert!(outcome.success);
    assert_eq!(outcome.output, Payload::Output(bytes!("c0ffee")));
}

#[test]
fn block_hash_lookups_are_bounded_to_the_window() {
    let contract = address!("dddd000000000000000000000000000000000004");
    let code = bytes!("04");
    let known = b256!("1111111111111111111111111111111111111111111111111111111111111111");
    let old = b256!("2222222222222222222222222222222222222222222222222222222222222222");

    let mut ledger = MemoryLedger::default()
        .with_balance(SENDER, U256::from(1))
        .with_block_number(1000)
        .with_ancestor_hash(999, known)
        .with_ancestor_hash(744, known)
        .with_ancestor_hash(743, old)
        .with_code(contract, code.clone());

    let config = ChainConfig::default();
    let interpreter = ScriptedInterpreter::new().on_code(code, move |host, _msg| {
        assert_eq!(host.block_hash(999), known);
        // Exactly 256 back is the oldest retrievable ancestor.
        assert_eq!(host.block_hash(744), known);
        // 257 back, the current block and the future are all empty.
        assert_eq!(host.block_hash(743), alloy_primitives::B256::ZERO);
        assert_eq!(host.block_hash(1000), alloy_primitives::B256::ZERO);
        assert_eq!(host.block_hash(1234), alloy_primitives::B256::ZERO);
        Ok(CallOutcome::output(Bytes::new()))
    });

    let mut executor = Executor::new(&mut ledger, &interpreter, &config);
    assert!(executor.call_message(call_message(contract, U256::ZERO)).unwrap().success);
}

#[test]
fn block_context_and_origin_are_exposed_to_code() {
    let contract = address!("eeee000000000000000000000000000000000005");
    let coinbase = address!("c01b000000000000000000000000000000000006");
    let code = bytes!("05");

    let mut ledger = MemoryLedger::default()
        .with_balance(SENDER, U256::from(1))
        .with_block_number(123)
        .with_coinbase(coinbase)
        .with_timestamp(456)
        .with_code(contract, code.clone());

    let config = ChainConfig::default();
    let interpreter = ScriptedInterpreter::new().on_code(code, move |host, _msg| {
        assert_eq!(host.block_number(), 123);
        assert_eq!(host.coinbase(), coinbase);
        assert_eq!(host.timestamp(), 456);
        assert_eq!(host.tx_origin(), SENDER);
        Ok(CallOutcome::output(Bytes::new()))
    });

    let tx = signed_tx(SENDER, TxKind::Call(contract), U256::ZERO, 0, Bytes::new());
    let mut executor = Executor::new(&mut ledger, &interpreter, &config);
    assert!(executor.apply_transaction(&tx).unwrap().success);
}
