//! # Registry Flows
//!
//! Deployment, ownership and list management end to end, including the
//! ordering a client sees when it enumerates adapters to find a predecessor.

#[cfg(test)]
mod tests {
    use crate::integration::fixtures::*;
    use balance_aggregator::prelude::*;
    use proptest::prelude::*;

    // =========================================================================
    // DEPLOYMENT
    // =========================================================================

    #[test]
    fn test_deploys_with_one_adapter() {
        let world = World::new();
        let a1 = world.fixed_adapter(1, 1);
        let aggregator = world.deploy(&[a1]).unwrap();

        assert_eq!(aggregator.get_adapters(), vec![a1]);
        assert_eq!(aggregator.owner(), DEPLOYER);
    }

    #[test]
    fn test_deploys_with_multiple_adapters() {
        let world = World::new();
        let a1 = world.fixed_adapter(1, 1);
        let a2 = world.fixed_adapter(2, 4);
        let aggregator = world.deploy(&[a1, a2]).unwrap();

        assert_eq!(aggregator.get_adapters(), vec![a2, a1]);
    }

    #[test]
    fn test_deployed_address_is_rejected_as_adapter() {
        let world = World::new();
        let own_address = compute_contract_address(DEPLOYER, 0);

        assert_eq!(
            world.deploy(&[own_address]).unwrap_err(),
            AggregatorError::InvalidAddress(own_address)
        );

        let mut aggregator = world.deploy(&[]).unwrap();
        assert_eq!(aggregator.address(), own_address);
        assert_eq!(
            aggregator.add_adapter(DEPLOYER, own_address),
            Err(AggregatorError::InvalidAddress(own_address))
        );
    }

    #[test]
    fn test_hardhat_addresses_enumerate_newest_first() {
        // First two CREATE addresses of Hardhat's default account, used as
        // adapters of an aggregator deployed by someone else.
        let hardhat: Address = "0xf39Fd6e51aad88F6F4ce6aB8827279cffFb92266".parse().unwrap();
        let first = compute_contract_address(hardhat, 0);
        let second = compute_contract_address(hardhat, 1);

        let world = World::new();
        let mut aggregator = world.deploy(&[first]).unwrap();
        aggregator.add_adapter(DEPLOYER, second).unwrap();

        assert_eq!(
            aggregator.get_adapters(),
            vec![
                "0xe7f1725E7734CE288F8367e1Bb143E90bb3F0512".parse().unwrap(),
                "0x5FbDB2315678afecb367f032d93F642f64180aa3".parse().unwrap(),
            ]
        );
    }

    // =========================================================================
    // OWNERSHIP
    // =========================================================================

    #[test]
    fn test_add_adapter_throws_if_not_authorized() {
        let world = World::new();
        let a1 = world.fixed_adapter(1, 1);
        let a2 = world.fixed_adapter(2, 4);
        let mut aggregator = world.deploy(&[a1]).unwrap();

        aggregator.transfer_ownership(DEPLOYER, STRANGER).unwrap();
        let err = aggregator.add_adapter(DEPLOYER, a2).unwrap_err();
        assert_eq!(err.to_string(), "Ownable: caller is not the owner");
        assert_eq!(aggregator.get_adapters(), vec![a1]);
    }

    #[test]
    fn test_ownership_gate_ignores_argument_validity() {
        let world = World::new();
        let a1 = world.fixed_adapter(1, 1);
        let mut aggregator = world.deploy(&[a1]).unwrap();

        for bad in [Address::ZERO, SENTINEL, a1] {
            assert!(aggregator.add_adapter(STRANGER, bad).unwrap_err().is_unauthorized());
        }
        assert!(aggregator
            .remove_adapter(STRANGER, Address::ZERO, Address::ZERO)
            .unwrap_err()
            .is_unauthorized());
    }

    // =========================================================================
    // LIST MANAGEMENT
    // =========================================================================

    #[test]
    fn test_remove_with_enumerated_predecessor() {
        let world = World::new();
        let adapters: Vec<Address> = (1..=5).map(|n| world.fixed_adapter(n, n)).collect();
        let mut aggregator = world.deploy(&adapters).unwrap();

        // client-side predecessor lookup from the enumeration
        let listed = aggregator.get_adapters();
        let target = adapters[2];
        let index = listed.iter().position(|a| *a == target).unwrap();
        let prev = if index == 0 { HEAD } else { listed[index - 1] };

        aggregator.remove_adapter(DEPLOYER, prev, target).unwrap();
        assert!(!aggregator.get_adapters().contains(&target));
        assert_eq!(aggregator.adapter_count(), 4);
    }

    #[test]
    fn test_remove_with_false_predecessor_leaves_list() {
        let world = World::new();
        let a1 = world.fixed_adapter(1, 1);
        let a2 = world.fixed_adapter(2, 4);
        let a3 = world.fixed_adapter(3, 7);
        let mut aggregator = world.deploy(&[a1, a2, a3]).unwrap();
        let before = aggregator.get_adapters();

        assert_eq!(
            aggregator.remove_adapter(DEPLOYER, a1, a3),
            Err(AggregatorError::WrongPredecessor {
                prev: a1,
                adapter: a3
            })
        );
        assert_eq!(aggregator.get_adapters(), before);
        assert_eq!(aggregator.adapter_count(), 3);
    }

    #[derive(Debug, Clone)]
    enum Op {
        Add(u64),
        RemoveHead,
        RemoveWithPrev(u64, u64),
    }

    fn op_strategy() -> impl Strategy<Value = Op> {
        prop_oneof![
            (1u64..12).prop_map(Op::Add),
            Just(Op::RemoveHead),
            (0u64..12, 1u64..12).prop_map(|(p, a)| Op::RemoveWithPrev(p, a)),
        ]
    }

    proptest! {
        #[test]
        fn prop_invariants_hold_after_any_sequence(ops in proptest::collection::vec(op_strategy(), 0..60)) {
            let world = World::new();
            let mut aggregator = world.deploy(&[]).unwrap();

            for op in ops {
                let before = aggregator.get_adapters();
                let result = match op {
                    Op::Add(n) => aggregator.add_adapter(DEPLOYER, adapter_address(n)),
                    Op::RemoveHead => match before.first() {
                        Some(head) => aggregator.remove_adapter(DEPLOYER, HEAD, *head),
                        None => Ok(()),
                    },
                    Op::RemoveWithPrev(p, a) => {
                        let prev = if p == 0 { HEAD } else { adapter_address(p) };
                        aggregator.remove_adapter(DEPLOYER, prev, adapter_address(a))
                    }
                };
                if result.is_err() {
                    prop_assert_eq!(aggregator.get_adapters(), before);
                }
                prop_assert_eq!(aggregator.adapter_count(), aggregator.get_adapters().len());
            }

            let mut seen = std::collections::HashSet::new();
            for adapter in aggregator.get_adapters() {
                prop_assert!(seen.insert(adapter));
            }
        }
    }
}
