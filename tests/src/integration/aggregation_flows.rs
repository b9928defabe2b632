//! # Aggregation Flows
//!
//! `balanceOf` across the base token, fixed adapters and LP positions,
//! driven both directly and through the request service.

#[cfg(test)]
mod tests {
    use crate::integration::fixtures::*;
    use balance_aggregator::prelude::*;
    use std::sync::Arc;
    use uuid::Uuid;

    // =========================================================================
    // SUMMATION
    // =========================================================================

    #[test]
    fn test_base_balance_without_adapters() {
        let world = World::new().with_user_balance(1000);
        let aggregator = world.deploy(&[]).unwrap();

        assert_eq!(
            aggregator.balance_of(world.chain.as_ref(), USER),
            Ok(U256::from(1000))
        );
    }

    #[test]
    fn test_base_plus_lp_position() {
        let world = World::new().with_user_balance(1000);
        let lp = world.lp_adapter(1, 1000, 100, 50);
        let aggregator = world.deploy(&[lp]).unwrap();

        assert_eq!(
            aggregator.balance_of(world.chain.as_ref(), USER),
            Ok(U256::from(1500))
        );
    }

    #[test]
    fn test_sum_is_independent_of_insertion_order() {
        let orders: [[u64; 3]; 3] = [[1, 2, 3], [3, 1, 2], [2, 3, 1]];
        for order in orders {
            let world = World::new().with_user_balance(1000);
            let amounts = [1, 4, 7];
            let adapters: Vec<Address> = order
                .iter()
                .map(|n| world.fixed_adapter(*n, amounts[(*n - 1) as usize]))
                .collect();
            let aggregator = world.deploy(&adapters).unwrap();

            assert_eq!(
                aggregator.balance_of(world.chain.as_ref(), USER),
                Ok(U256::from(1012)),
                "order {order:?}"
            );
        }
    }

    #[test]
    fn test_removed_adapter_no_longer_counts() {
        let world = World::new().with_user_balance(1000);
        let a1 = world.fixed_adapter(1, 1);
        let a2 = world.fixed_adapter(2, 4);
        let mut aggregator = world.deploy(&[a1, a2]).unwrap();

        aggregator.remove_adapter(DEPLOYER, HEAD, a2).unwrap();
        assert_eq!(
            aggregator.balance_of(world.chain.as_ref(), USER),
            Ok(U256::from(1001))
        );
    }

    #[test]
    fn test_lp_share_rounds_down() {
        let world = World::new();
        // 10 * 1 / 3 = 3.33..
        let lp = world.lp_adapter(1, 10, 3, 1);
        let aggregator = world.deploy(&[lp]).unwrap();

        assert_eq!(
            aggregator.balance_of(world.chain.as_ref(), USER),
            Ok(U256::from(3))
        );
    }

    // =========================================================================
    // FAILURES
    // =========================================================================

    #[test]
    fn test_reverting_adapter_fails_whole_query() {
        let world = World::new().with_user_balance(1000);
        let a1 = world.fixed_adapter(1, 1);
        let a2 = world.fixed_adapter(2, 4);
        let aggregator = world.deploy(&[a1, a2]).unwrap();

        world.chain.revert(a1, "paused");
        assert_eq!(
            aggregator.balance_of(world.chain.as_ref(), USER),
            Err(AggregatorError::CallFailed(CallError::Reverted {
                target: a1,
                reason: "paused".into()
            }))
        );

        world.chain.restore(a1);
        assert_eq!(
            aggregator.balance_of(world.chain.as_ref(), USER),
            Ok(U256::from(1005))
        );
    }

    #[test]
    fn test_adapter_without_code_fails_query() {
        let world = World::new().with_user_balance(1000);
        let ghost = adapter_address(9);
        let aggregator = world.deploy(&[ghost]).unwrap();

        assert_eq!(
            aggregator.balance_of(world.chain.as_ref(), USER),
            Err(AggregatorError::CallFailed(CallError::NoContract(ghost)))
        );
    }

    #[test]
    fn test_summation_overflow_reverts() {
        let world = World::new();
        world.chain.set_balance(TOKEN, USER, U256::MAX);
        let a1 = world.fixed_adapter(1, 1);
        let aggregator = world.deploy(&[a1]).unwrap();

        assert_eq!(
            aggregator.balance_of(world.chain.as_ref(), USER),
            Err(AggregatorError::Arithmetic(ArithmeticError::Overflow))
        );
    }

    #[test]
    fn test_lp_with_zero_supply_reverts() {
        let world = World::new().with_user_balance(1000);
        let lp = world.lp_adapter(1, 1000, 0, 0);
        let aggregator = world.deploy(&[lp]).unwrap();

        assert_eq!(
            aggregator.balance_of(world.chain.as_ref(), USER),
            Err(AggregatorError::Arithmetic(ArithmeticError::DivisionByZero))
        );
    }

    // =========================================================================
    // SERVICE
    // =========================================================================

    #[test]
    fn test_service_end_to_end() {
        let world = World::new().with_user_balance(1000);
        let lp = world.lp_adapter(1, 1000, 100, 50);
        let fixed = world.fixed_adapter(2, 7);
        let aggregator = world.deploy(&[lp]).unwrap();
        let service = AggregatorService::new(aggregator, Arc::clone(&world.chain));

        let denied = service.handle(
            STRANGER,
            Uuid::new_v4(),
            AggregatorRequest::AddAdapter { adapter: fixed },
        );
        assert!(denied.unwrap_err().is_unauthorized());

        service
            .handle(
                DEPLOYER,
                Uuid::new_v4(),
                AggregatorRequest::AddAdapter { adapter: fixed },
            )
            .unwrap();

        let balance = service.handle(
            STRANGER,
            Uuid::new_v4(),
            AggregatorRequest::BalanceOf { account: USER },
        );
        assert_eq!(balance, Ok(AggregatorResponse::Balance(U256::from(1507))));

        let stats = service.stats();
        assert_eq!(stats.calls, 3);
        assert_eq!(stats.successful_calls, 2);
        assert_eq!(stats.reverted_calls, 1);
        assert_eq!(stats.unauthorized_calls, 1);
    }

    #[test]
    fn test_service_requests_from_json() {
        let world = World::new().with_user_balance(1000);
        let a1 = world.fixed_adapter(1, 1);
        let aggregator = world.deploy(&[]).unwrap();
        let service = AggregatorService::new(aggregator, Arc::clone(&world.chain));

        let add = AggregatorRequest::AddAdapter { adapter: a1 };
        let wire = serde_json::to_string(&add).unwrap();
        let request: AggregatorRequest = serde_json::from_str(&wire).unwrap();
        service.handle(DEPLOYER, Uuid::new_v4(), request).unwrap();

        let events = service.drain_events();
        assert!(events.contains(&AggregatorEvent::AdapterAdded { adapter: a1 }));
        assert!(service.drain_events().is_empty());
    }
}
