//! Scripted full-session tests driving the public API the way the console
//! front end does: a fixed sequence of input lines, assertions on every
//! reaction.

use roshambo_core::{GameSession, HmacKey, MoveCommitment, MoveSet, Outcome, Turn};

fn tokens(names: &[&str]) -> Vec<String> {
    names.iter().map(|s| s.to_string()).collect()
}

#[test]
fn test_full_session_against_cycling_computer() {
    let mut game = GameSession::new(tokens(&["rock", "paper", "scissors"])).unwrap();
    let digest = game.commitment().digest().to_string();

    // Digest is hex-encoded SHA-256 output, available before the first round.
    assert_eq!(digest.len(), 64);

    // Round 1: rock vs rock (cursor 0).
    let round = match game.handle_line("1") {
        Turn::Round(report) => report,
        other => panic!("expected a round, got {:?}", other),
    };
    assert_eq!(round.outcome, Outcome::Draw);

    // Help between rounds must not move the computer's cursor.
    assert!(matches!(game.handle_line("?"), Turn::Table(_)));
    assert_eq!(game.cursor(), 1);

    // Garbage input reprompts with the valid range and changes nothing.
    assert_eq!(game.handle_line("paper"), Turn::Invalid { max: 3 });
    assert_eq!(game.cursor(), 1);

    // Round 2: scissors vs paper (cursor 1) - scissors cuts paper.
    let round = match game.handle_line("3") {
        Turn::Round(report) => report,
        other => panic!("expected a round, got {:?}", other),
    };
    assert_eq!(round.player_move, "scissors");
    assert_eq!(round.computer_move, "paper");
    assert_eq!(round.outcome, Outcome::Win);

    // Round 3: paper vs scissors (cursor 2) - scissors cuts paper again.
    let round = match game.handle_line("2") {
        Turn::Round(report) => report,
        other => panic!("expected a round, got {:?}", other),
    };
    assert_eq!(round.outcome, Outcome::Lose);

    // Cursor wrapped around after n rounds.
    assert_eq!(game.cursor(), 0);

    assert_eq!(game.handle_line("0"), Turn::Quit);
}

#[test]
fn test_revealed_key_verifies_the_startup_digest() {
    let mut game = GameSession::new(tokens(&["rock", "paper", "scissors"])).unwrap();
    let digest = *game.commitment().digest();

    let round = match game.handle_line("1") {
        Turn::Round(report) => report,
        other => panic!("expected a round, got {:?}", other),
    };

    // The player's side of the protocol: decode the revealed key, recompute
    // the keyed digest over the move list, compare with what was shown at
    // startup.
    let key_bytes: [u8; 32] = hex::decode(&round.revealed_key)
        .unwrap()
        .try_into()
        .unwrap();
    let key = HmacKey::from_bytes(key_bytes);
    let moves = MoveSet::new(tokens(&["rock", "paper", "scissors"])).unwrap();

    assert!(MoveCommitment::verify(&key, &moves, &digest));

    // A tampered move list must not verify against the same key and digest.
    let tampered = MoveSet::new(tokens(&["rock", "paper", "lizard"])).unwrap();
    assert!(!MoveCommitment::verify(&key, &tampered, &digest));
}

#[test]
fn test_malformed_move_lists_never_build_a_session() {
    assert!(GameSession::new(tokens(&["rock", "paper"])).is_err());
    assert!(GameSession::new(tokens(&["rock", "paper", "scissors", "well"])).is_err());
    assert!(GameSession::new(tokens(&["rock", "paper", "rock"])).is_err());
    assert!(GameSession::new(vec![]).is_err());
}

#[test]
fn test_seven_move_session_is_balanced_in_play() {
    let names = ["1st", "2nd", "3rd", "4th", "5th", "6th", "7th"];
    let mut game = GameSession::new(tokens(&names)).unwrap();

    // Play move 1 for a full cycle: one draw, three losses to the moves
    // after it, three wins over the moves before it.
    let mut wins = 0;
    let mut losses = 0;
    let mut draws = 0;
    for _ in 0..7 {
        match game.handle_line("1") {
            Turn::Round(report) => match report.outcome {
                Outcome::Win => wins += 1,
                Outcome::Lose => losses += 1,
                Outcome::Draw => draws += 1,
            },
            other => panic!("expected a round, got {:?}", other),
        }
    }

    assert_eq!((wins, losses, draws), (3, 3, 1));
    assert_eq!(game.cursor(), 0);
}
