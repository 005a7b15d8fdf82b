//! Turn loop driven by scripted input.

use std::cell::RefCell;
use std::io::Cursor;
use std::rc::Rc;

use veto_connect_four::ai::{Agent, HumanAgent, RandomAgent};
use veto_connect_four::error::{AgentError, SessionError};
use veto_connect_four::game::{GameOutcome, Marker};
use veto_connect_four::session::Session;

fn humans(script: &str) -> [Box<dyn Agent>; 2] {
    let input = Rc::new(RefCell::new(Cursor::new(script.to_string())));
    [
        Box::new(HumanAgent::new(Marker::FIRST, Rc::clone(&input))),
        Box::new(HumanAgent::new(Marker::SECOND, input)),
    ]
}

#[test]
fn test_human_game_reprompts_after_bad_moves() {
    // B fumbles twice; A stacks column 4.
    let script = "d4\nhello\nd1\nd4\nd9\nd1\nd4\nd1\nd4\n";
    let mut out = Vec::new();
    let mut session = Session::new(humans(script), &mut out);

    let outcome = session.run().unwrap();
    assert_eq!(outcome, GameOutcome::Winner(Marker::FIRST));
    assert_eq!(session.state().history().len(), 7);

    drop(session);
    let text = String::from_utf8(out).unwrap();
    assert!(text.contains("Player (A) enter a move: "));
    assert!(text.contains("the move hello is invalid."));
    assert!(text.contains("the move d9 is invalid."));
    assert!(text.contains("The winner is Player (A)!"));
    assert!(text.trim_end().ends_with("  1   2   3   4   5   6   7"));
}

#[test]
fn test_illegal_move_is_reported_and_same_player_retries() {
    // A vetoes column 2; B tries the vetoed column, then plays elsewhere.
    let script = "v2\nd2\nd3\nd1\nd3\nd1\nd3\nd1\nd5\nd1\n";
    let mut out = Vec::new();
    let mut session = Session::new(humans(script), &mut out);

    let outcome = session.run().unwrap();
    assert_eq!(outcome, GameOutcome::Winner(Marker::FIRST));

    let history = session.state().history();
    let by_b: Vec<String> = history.by(Marker::SECOND).map(|mv| mv.to_string()).collect();
    assert_eq!(by_b, ["d3", "d3", "d3", "d5"]);

    drop(session);
    let text = String::from_utf8(out).unwrap();
    assert!(text.contains("the move d2 is illegal."));
}

#[test]
fn test_closed_input_aborts_the_session() {
    let mut out = Vec::new();
    let mut session = Session::new(humans("d1\n"), &mut out);

    let err = session.run().unwrap_err();
    assert!(matches!(
        err,
        SessionError::Agent(AgentError::InputClosed(marker)) if marker == Marker::SECOND
    ));
}

#[test]
fn test_computers_finish_a_game() {
    let seats: [Box<dyn Agent>; 2] = [
        Box::new(RandomAgent::with_seed(Marker::FIRST, 11)),
        Box::new(RandomAgent::with_seed(Marker::SECOND, 12)),
    ];
    let mut out = Vec::new();
    let mut session = Session::new(seats, &mut out);

    let outcome = session.run().unwrap();
    assert!(session.state().is_over());

    drop(session);
    let text = String::from_utf8(out).unwrap();
    assert!(text.contains("Computer (A) is thinking..."));
    match outcome {
        GameOutcome::Draw => assert!(text.contains("The game was a draw.")),
        GameOutcome::Winner(marker) => {
            assert!(text.contains(&format!("The winner is {marker}!")))
        }
    }
}
