//! End-to-end integration tests
//!
//! These tests drive the library through its public surface only:
//! - The reference banking scenario directly against the ledger
//! - A full interactive session from scripted stdin-like input
//! - Script replay from a temporary CSV file, with the summary checked verbatim
//! - Property tests for the accounting and history invariants

#[cfg(test)]
mod tests {
    use online_banking::frontend::{InteractiveShell, ScriptFrontend};
    use online_banking::{AccountEvent, BankingError, Frontend, Ledger, LedgerConfig};
    use rstest::rstest;
    use rust_decimal::Decimal;
    use std::io::{Cursor, Write};
    use tempfile::NamedTempFile;

    fn dec(value: &str) -> Decimal {
        value.parse().unwrap()
    }

    fn balance(ledger: &Ledger, username: &str, account: &str) -> Decimal {
        ledger
            .view_account_details(username, account)
            .unwrap()
            .balance
    }

    fn history_len(ledger: &Ledger, username: &str, account: &str) -> usize {
        ledger
            .view_transaction_history(username, account)
            .unwrap()
            .len()
    }

    #[test]
    fn test_reference_scenario() {
        let mut ledger = Ledger::default();

        ledger.create_account("alice", "A1", dec("100.0")).unwrap();

        ledger.deposit("alice", "A1", dec("50")).unwrap();
        assert_eq!(balance(&ledger, "alice", "A1"), dec("150.0"));
        assert_eq!(history_len(&ledger, "alice", "A1"), 2);

        let result = ledger.withdraw("alice", "A1", dec("200"));
        assert!(matches!(result, Err(BankingError::InsufficientFunds { .. })));
        assert_eq!(balance(&ledger, "alice", "A1"), dec("150.0"));
        assert_eq!(history_len(&ledger, "alice", "A1"), 3);
        assert_eq!(
            ledger.view_transaction_history("alice", "A1").unwrap()[2],
            AccountEvent::WithdrawalFailed { amount: dec("200") }
        );

        ledger.create_account("alice", "A2", dec("0.0")).unwrap();
        ledger
            .transfer_funds("alice", "A1", "A2", dec("150.0"))
            .unwrap();
        assert_eq!(balance(&ledger, "alice", "A1"), dec("0.0"));
        assert_eq!(balance(&ledger, "alice", "A2"), dec("150.0"));
        assert_eq!(history_len(&ledger, "alice", "A1"), 4);
        assert_eq!(history_len(&ledger, "alice", "A2"), 2);
        assert_eq!(ledger.transfers().len(), 1);

        assert_eq!(
            ledger.view_account_details("alice", "A3"),
            Err(BankingError::account_not_found("alice", "A3"))
        );
    }

    #[test]
    fn test_interactive_session_end_to_end() {
        let input = "1\nalice\nA1\n100.0\n\
                     1\nalice\nA2\n0.0\n\
                     3\nalice\nA1\nA2\n100.0\n\
                     2\nalice\nA1\n\
                     4\nalice\nA2\n\
                     2\nalice\nA3\n\
                     5\n";
        let mut shell = InteractiveShell::new(Cursor::new(input.as_bytes().to_vec()));
        let mut ledger = Ledger::default();
        let mut output = Vec::new();

        shell.run(&mut ledger, &mut output).unwrap();
        let output = String::from_utf8(output).unwrap();

        assert_eq!(output.matches("Account created successfully.").count(), 2);
        assert!(output.contains("Transfer successful."));
        assert!(output.contains("Account Number: A1\nBalance: $0.0\n"));
        assert!(output.contains(
            "Transaction History for Account Number: A2\n\
             Account created with balance: $0.0\n\
             Deposited: $100.0 | New Balance: $100.0\n"
        ));
        assert!(output.contains("Account not found: A3 (user alice)"));
        assert!(output.ends_with("Thank you for using the Online Banking System.\n"));
        assert_eq!(output.matches("Choose an option: ").count(), 7);
    }

    #[test]
    fn test_interactive_capacity_exceeded_is_reported() {
        let input = "1\nbob\nB1\n1\n1\nbob\nB2\n1\n5\n";
        let mut shell = InteractiveShell::new(Cursor::new(input.as_bytes().to_vec()));
        let mut ledger = Ledger::new(LedgerConfig::new(1));
        let mut output = Vec::new();

        shell.run(&mut ledger, &mut output).unwrap();
        let output = String::from_utf8(output).unwrap();

        assert!(output.contains("Maximum number of accounts reached for user bob (capacity 1)"));
        assert_eq!(ledger.find_user("bob").unwrap().accounts().len(), 1);
    }

    fn run_script(content: &str) -> (Ledger, String) {
        let mut file = NamedTempFile::new().expect("Failed to create temp file");
        file.write_all(content.as_bytes())
            .expect("Failed to write to temp file");
        file.flush().expect("Failed to flush temp file");

        let mut ledger = Ledger::default();
        let mut output = Vec::new();
        ScriptFrontend::new(file.path())
            .run(&mut ledger, &mut output)
            .unwrap_or_else(|e| panic!("Failed to run script: {}", e));

        (ledger, String::from_utf8(output).unwrap())
    }

    #[rstest]
    #[case::reference_scenario(
        "op,username,account,destination,amount\n\
         create,alice,A1,,100.0\n\
         deposit,alice,A1,,50\n\
         withdraw,alice,A1,,200\n\
         create,alice,A2,,0.0\n\
         transfer,alice,A1,A2,150.0\n",
        "username,account,balance,entries\n\
         alice,A1,0.0,4\n\
         alice,A2,150.0,2\n"
    )]
    #[case::multiple_users(
        "op,username,account,destination,amount\n\
         create,bob,B1,,5\n\
         create,alice,A1,,1\n\
         create,bob,B2,,0\n\
         transfer,bob,B1,B2,5\n",
        "username,account,balance,entries\n\
         bob,B1,0,2\n\
         bob,B2,5,2\n\
         alice,A1,1,1\n"
    )]
    #[case::rejected_rows_skipped(
        "op,username,account,destination,amount\n\
         create,alice,A1,,10\n\
         transfer,alice,A1,A1,1\n\
         transfer,alice,A1,ZZ,1\n\
         deposit,alice,A1,,-4\n\
         refund,alice,A1,,4\n\
         withdraw,alice,A1,,3\n",
        "username,account,balance,entries\n\
         alice,A1,7,2\n"
    )]
    #[case::negative_initial_balance(
        "op,username,account,destination,amount\n\
         create,carol,C1,,-20\n\
         withdraw,carol,C1,,1\n",
        "username,account,balance,entries\n\
         carol,C1,-20,2\n"
    )]
    #[case::blank_lines_between_rows(
        "op,username,account,destination,amount\n\n\
         create,dave,D1,,3\n\n\
         explode,dave,D1,,1\n\n\
         deposit,dave,D1,,2\n",
        "username,account,balance,entries\n\
         dave,D1,5,2\n"
    )]
    fn test_script_fixtures(#[case] script: &str, #[case] expected: &str) {
        let (_, output) = run_script(script);
        assert_eq!(output, expected);
    }

    #[test]
    fn test_script_transfer_log_matches_successes() {
        let (ledger, _) = run_script(
            "op,username,account,destination,amount\n\
             create,alice,A1,,10\n\
             create,alice,A2,,0\n\
             transfer,alice,A1,A2,4\n\
             transfer,alice,A1,A2,40\n\
             transfer,alice,A2,A1,1\n",
        );

        let log: Vec<String> = ledger.transfers().iter().map(|t| t.to_string()).collect();
        assert_eq!(
            log,
            vec![
                "Transferred $4 from A1 to A2".to_string(),
                "Transferred $1 from A2 to A1".to_string(),
            ]
        );
    }
}

#[cfg(test)]
mod properties {
    use online_banking::{AccountEvent, Ledger};
    use proptest::prelude::*;
    use rust_decimal::Decimal;

    #[derive(Debug, Clone)]
    enum Op {
        Deposit(i64),
        Withdraw(i64),
        Transfer(bool, i64),
    }

    fn op() -> impl Strategy<Value = Op> {
        prop_oneof![
            (1i64..10_000).prop_map(Op::Deposit),
            (1i64..10_000).prop_map(Op::Withdraw),
            (any::<bool>(), 1i64..10_000).prop_map(|(forward, value)| Op::Transfer(forward, value)),
        ]
    }

    fn cents(value: i64) -> Decimal {
        Decimal::new(value, 2)
    }

    proptest! {
        #[test]
        fn balance_matches_successful_operations(
            initial in 0i64..10_000,
            ops in proptest::collection::vec(op(), 0..60),
        ) {
            let mut ledger = Ledger::default();
            ledger.create_account("alice", "A1", cents(initial)).unwrap();
            ledger.create_account("alice", "A2", Decimal::ZERO).unwrap();

            let mut expected_a1 = cents(initial);
            let mut expected_a2 = Decimal::ZERO;

            for op in ops {
                match op {
                    Op::Deposit(v) => {
                        if ledger.deposit("alice", "A1", cents(v)).is_ok() {
                            expected_a1 += cents(v);
                        }
                    }
                    Op::Withdraw(v) => {
                        if ledger.withdraw("alice", "A1", cents(v)).is_ok() {
                            expected_a1 -= cents(v);
                        }
                    }
                    Op::Transfer(forward, v) => {
                        let (from, to) = if forward { ("A1", "A2") } else { ("A2", "A1") };
                        let before = ledger.transfers().len();
                        if ledger.transfer_funds("alice", from, to, cents(v)).is_ok() {
                            prop_assert_eq!(ledger.transfers().len(), before + 1);
                            if forward {
                                expected_a1 -= cents(v);
                                expected_a2 += cents(v);
                            } else {
                                expected_a2 -= cents(v);
                                expected_a1 += cents(v);
                            }
                        } else {
                            prop_assert_eq!(ledger.transfers().len(), before);
                        }
                    }
                }
            }

            let a1 = ledger.view_account_details("alice", "A1").unwrap().balance;
            let a2 = ledger.view_account_details("alice", "A2").unwrap().balance;
            prop_assert_eq!(a1, expected_a1);
            prop_assert_eq!(a2, expected_a2);
            prop_assert_eq!(a1 + a2, expected_a1 + expected_a2);
        }

        #[test]
        fn history_only_grows_and_never_changes(
            amounts in proptest::collection::vec((any::<bool>(), 1i64..5_000), 1..40),
        ) {
            let mut ledger = Ledger::default();
            ledger.create_account("alice", "A1", cents(2_500)).unwrap();

            let mut seen: Vec<AccountEvent> = ledger
                .view_transaction_history("alice", "A1")
                .unwrap()
                .to_vec();

            for (deposit, v) in amounts {
                let _ = if deposit {
                    ledger.deposit("alice", "A1", cents(v))
                } else {
                    ledger.withdraw("alice", "A1", cents(v))
                };

                let history = ledger.view_transaction_history("alice", "A1").unwrap();
                prop_assert_eq!(history.len(), seen.len() + 1);
                prop_assert_eq!(&history[..seen.len()], &seen[..]);
                seen = history.to_vec();
            }
        }

        #[test]
        fn failed_withdrawal_keeps_balance(
            initial in 0i64..1_000,
            excess in 1i64..1_000,
        ) {
            let mut ledger = Ledger::default();
            ledger.create_account("alice", "A1", cents(initial)).unwrap();

            let result = ledger.withdraw("alice", "A1", cents(initial + excess));

            prop_assert!(result.is_err());
            let history = ledger.view_transaction_history("alice", "A1").unwrap();
            prop_assert_eq!(history.len(), 2);
            prop_assert_eq!(
                &history[1],
                &AccountEvent::WithdrawalFailed { amount: cents(initial + excess) }
            );
            prop_assert_eq!(
                ledger.view_account_details("alice", "A1").unwrap().balance,
                cents(initial)
            );
        }
    }
}
