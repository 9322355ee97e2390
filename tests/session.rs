//! Scripted console session tests.

use std::io::Cursor;

use blackjack_table::{
    Card, Deck, Game, GameOptions, GameState, PlayerMove, Rank, Session, SessionError, Suit,
};

type ScriptedSession = Session<Cursor<Vec<u8>>, Vec<u8>>;

fn session(input: &str) -> ScriptedSession {
    Session::new(Cursor::new(input.as_bytes().to_vec()), Vec::new())
}

fn output_of(session: ScriptedSession) -> String {
    String::from_utf8(session.into_output()).unwrap()
}

fn stacked_game(draws: &[Card]) -> Game {
    let mut game = Game::new(GameOptions::default(), "Avery", 11);
    let mut cards = draws.to_vec();
    cards.reverse();
    game.set_deck(Deck::from_cards(cards));
    game
}

/// Dealer 10 + 7, player 10 + 6, and a King waiting for the player's hit.
fn bust_on_hit() -> Game {
    stacked_game(&[
        Card::new(Suit::Hearts, Rank::Ten),
        Card::new(Suit::Clubs, Rank::Ten),
        Card::new(Suit::Spades, Rank::Seven),
        Card::new(Suit::Clubs, Rank::Six),
        Card::new(Suit::Hearts, Rank::King),
    ])
}

#[test]
fn seat_asks_for_a_name() {
    let mut session = session("Avery\n");
    let game = session.seat(GameOptions::default(), 1).unwrap();

    assert_eq!(game.player().chips(), 100);
    let output = output_of(session);
    assert!(output.contains("My name is Morgan and I will be your dealer for today!"));
    assert!(output.contains("May I get your name? "));
    assert!(output.contains("Thank you, Avery. I will start you off with 100 chips."));
}

#[test]
fn bust_then_decline_cashes_out() {
    let mut game = bust_on_hit();
    let mut session = session("50\nhit\nn\n");

    session.play(&mut game).unwrap();

    assert_eq!(game.player().chips(), 50);
    assert_eq!(game.pot(), 0);
    assert_eq!(game.state(), GameState::Terminated);
    assert!(!game.playing());

    let output = output_of(session);
    assert!(output.contains("You have placed a bet of 50. Good Luck!"));
    assert!(output.contains("Avery, has been dealt King of Hearts bringing their total to 26."));
    assert!(output.contains("OH NO! Avery has busted!"));
    assert!(output.contains("I have won the pot of 100"));
    assert!(output.contains("Avery has cashed out with 50 chips! Have a great day!"));
}

#[test]
fn dealer_hole_card_stays_hidden_until_dealer_turn() {
    let mut game = bust_on_hit();
    let mut session = session("50\nhit\nn\n");
    session.play(&mut game).unwrap();

    let output = output_of(session);
    assert!(output.contains("DEALER HAND:\nSeven of Spades with a value of 7\n"));
    assert!(!output.contains("Ten of Hearts"));
}

#[test]
fn running_out_of_chips_forces_termination() {
    let mut game = bust_on_hit();
    let mut session = session("100\nhit\n");

    session.play(&mut game).unwrap();

    assert_eq!(game.player().chips(), 0);
    assert_eq!(game.state(), GameState::Terminated);
    let output = output_of(session);
    assert!(output.contains("I am sorry, you do not have enough chips to play again."));
    assert!(!output.contains("Would you like to play again?"));
}

#[test]
fn invalid_answers_are_asked_again() {
    let mut game = stacked_game(&[
        Card::new(Suit::Hearts, Rank::Ten),   // dealer
        Card::new(Suit::Clubs, Rank::Ten),    // player
        Card::new(Suit::Spades, Rank::Nine),  // dealer
        Card::new(Suit::Clubs, Rank::Seven),  // player
    ]);
    let mut session = session("lots\n0\n500\n25\njump\nSTAY\nmaybe\nN\n");

    session.play(&mut game).unwrap();

    assert_eq!(game.player().chips(), 75);
    let output = output_of(session);
    assert!(output.contains("That is not a valid amount. Please try again."));
    assert!(output.contains("You must bet at least 1 chip. Please try again."));
    assert!(output.contains("You do not have enough chips for that wager. Please try again."));
    assert!(output.contains("That is not a valid option. Please try again."));
    assert!(output.contains("That is not a valid choice. Please try again."));
    assert!(output.contains("Avery, has decided to stay with a hand value of 17."));
    assert!(output.contains("I have won with a score of 19"));
    assert_eq!(output.matches("How much would you like to bet? ").count(), 4);
}

#[test]
fn winning_round_then_replay() {
    let mut game = stacked_game(&[
        Card::new(Suit::Hearts, Rank::Ten),   // dealer
        Card::new(Suit::Clubs, Rank::Ten),    // player
        Card::new(Suit::Spades, Rank::Six),   // dealer
        Card::new(Suit::Clubs, Rank::Nine),   // player
        Card::new(Suit::Hearts, Rank::King),  // dealer draw
    ]);
    let mut session = session("50\nstay\ny\n10\nstay\nn\n");

    session.play(&mut game).unwrap();

    assert_eq!(game.state(), GameState::Terminated);
    assert_eq!(game.pot(), 0);
    let output = output_of(session);
    assert!(output.contains("I draw the King of Hearts."));
    assert!(output.contains("OH NO! I have busted!"));
    assert!(output.contains("Avery has won the pot of 100"));
    assert!(output.contains("Avery, you now have 150 chips."));
    assert_eq!(output.matches("Would you like to play again? (y/n): ").count(), 2);
    assert_eq!(output.matches("Shuffling cards...").count(), 2);
}

#[test]
fn closed_input_ends_the_session() {
    let mut session = session("");
    let err = session.seat(GameOptions::default(), 1).unwrap_err();
    assert!(matches!(err, SessionError::InputClosed));

    let mut game = bust_on_hit();
    let mut session = self::session("50\n");
    let err = session.play(&mut game).unwrap_err();
    assert!(matches!(err, SessionError::InputClosed));
}

#[test]
fn moves_parse_ignoring_case() {
    assert_eq!(PlayerMove::parse("HIT"), Some(PlayerMove::Hit));
    assert_eq!(PlayerMove::parse(" Stay "), Some(PlayerMove::Stay));
    assert_eq!(PlayerMove::parse("double"), None);
}

#[test]
fn empty_bankroll_cashes_out_without_betting() {
    let mut game = Game::new(GameOptions::default().with_starting_chips(0), "Avery", 11);
    let mut session = session("");

    session.play(&mut game).unwrap();

    assert_eq!(game.state(), GameState::Terminated);
    assert_eq!(game.player().chips(), 0);
    let output = output_of(session);
    assert!(output.contains("I am sorry, you do not have enough chips to play again."));
    assert!(output.contains("Avery has cashed out with 0 chips! Have a great day!"));
    assert!(!output.contains("How much would you like to bet?"));
}

#[test]
fn hand_listing_shows_demoted_ace_value() {
    let mut game = stacked_game(&[
        Card::new(Suit::Hearts, Rank::Ten),   // dealer
        Card::new(Suit::Clubs, Rank::Ace),    // player
        Card::new(Suit::Spades, Rank::Nine),  // dealer
        Card::new(Suit::Diamonds, Rank::Ace), // player
    ]);
    let mut session = session("10\nstay\nn\n");

    session.play(&mut game).unwrap();

    let output = output_of(session);
    assert!(output.contains(
        "AVERY HAND:\nAce of Clubs with a value of 11\nAce of Diamonds with a value of 1\n"
    ));
    assert!(output.contains("Avery, has decided to stay with a hand value of 12."));
}
