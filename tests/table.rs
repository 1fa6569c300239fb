//! Round engine integration tests.

use bjtable::{
    ActionError, BetError, Card, DECK_SIZE, DealError, Decision, DecisionPolicy, EmptyShoeError,
    HandOutcome, PlayerResult, Rank, RoundError, RoundPhase, SetupError, Shoe, ShowdownError, Suit, Table,
    TableEvent, TableOptions, TurnView, new_deck,
};

const fn card(rank: Rank, suit: Suit) -> Card {
    Card::new(rank, suit)
}

/// A full deck that deals `draws` first, then the rest in canonical order.
fn stacked(draws: &[Card]) -> Shoe {
    let mut cards = draws.to_vec();
    cards.extend(new_deck().into_iter().filter(|c| !draws.contains(c)));
    Shoe::from_cards(cards)
}

fn table_with(names: &[&str]) -> Table {
    Table::new(TableOptions::default(), names.iter().copied(), 42).unwrap()
}

/// Starts a round, bets `bet` for every player, and stacks the shoe.
fn ready(table: &mut Table, bet: usize, draws: &[Card]) {
    table.start_round().unwrap();
    let ids: Vec<u8> = table.players().iter().map(|p| p.id()).collect();
    for id in ids {
        table.place_bet(id, bet).unwrap();
    }
    table.set_shoe(stacked(draws)).unwrap();
}

fn cards_on_table(table: &Table) -> usize {
    table.shoe().len()
        + table.dealer().hand().len()
        + table
            .players()
            .iter()
            .map(|p| p.hand().len())
            .sum::<usize>()
}

/// Replays a fixed list of decisions, standing once it runs out.
struct Scripted(Vec<Decision>);

impl DecisionPolicy for Scripted {
    fn decide(&mut self, _turn: &TurnView<'_>) -> Decision {
        if self.0.is_empty() {
            Decision::Stand
        } else {
            self.0.remove(0)
        }
    }
}

#[test]
fn setup_errors() {
    let options = TableOptions::default();
    assert_eq!(
        Table::new(options, Vec::<String>::new(), 1).unwrap_err(),
        SetupError::NoPlayers
    );
    assert_eq!(
        Table::new(options, ["a", "b", "c", "d", "e"], 1).unwrap_err(),
        SetupError::TooManyPlayers { count: 5, max: 4 }
    );
    assert_eq!(
        Table::new(options.with_max_players(1), ["a", "b"], 1).unwrap_err(),
        SetupError::TooManyPlayers { count: 2, max: 1 }
    );
    assert_eq!(
        Table::new(options.with_minimum_bet(0), ["a"], 1).unwrap_err(),
        SetupError::ZeroMinimumBet
    );
    assert_eq!(
        Table::new(options.with_starting_bankroll(10), ["a"], 1).unwrap_err(),
        SetupError::BankrollBelowMinimum {
            bankroll: 10,
            minimum: 25
        }
    );
}

#[test]
fn players_are_seated_with_defaults() {
    let table = table_with(&["Ann", ""]);

    assert_eq!(table.phase(), RoundPhase::RoundEnd);
    assert_eq!(table.players()[0].name(), "Ann");
    assert_eq!(table.players()[1].name(), "Player 2");
    assert_eq!(table.players()[1].id(), 2);
    assert_eq!(table.player(1).unwrap().bankroll().funds(), Some(500));
    assert_eq!(table.dealer().bankroll().funds(), None);
    assert!(table.dealer().bankroll().covers(usize::MAX));
    assert!(!table.player(1).unwrap().bankroll().covers(501));
    assert_eq!(table.shoe().len(), DECK_SIZE);
    assert_eq!(table.pot(), 0);
}

#[test]
fn bet_errors() {
    let mut table = table_with(&["Ann"]);

    assert_eq!(table.place_bet(1, 50).unwrap_err(), BetError::InvalidState);

    table.start_round().unwrap();
    assert_eq!(table.place_bet(1, 0).unwrap_err(), BetError::ZeroBet);
    assert_eq!(
        table.place_bet(1, 10).unwrap_err(),
        BetError::BelowMinimum { minimum: 25 }
    );
    assert_eq!(
        table.place_bet(1, 600).unwrap_err(),
        BetError::InsufficientFunds { available: 500 }
    );
    assert_eq!(table.place_bet(9, 50).unwrap_err(), BetError::PlayerNotFound);

    assert_eq!(table.place_bet(1, 50), Ok(100));
    assert_eq!(table.place_bet(1, 50).unwrap_err(), BetError::AlreadyPlaced);
    assert_eq!(table.player(1).unwrap().bankroll().funds(), Some(450));
    assert_eq!(table.pot(), 100);
}

#[test]
fn deal_errors() {
    let mut table = table_with(&["Ann", "Bo"]);
    assert_eq!(table.deal().unwrap_err(), DealError::InvalidState);

    table.start_round().unwrap();
    table.place_bet(1, 25).unwrap();
    assert_eq!(table.deal().unwrap_err(), DealError::MissingBet(2));

    table.place_bet(2, 25).unwrap();
    table.set_shoe(Shoe::from_cards(vec![
        card(Rank::Two, Suit::Clubs),
        card(Rank::Three, Suit::Clubs),
        card(Rank::Four, Suit::Clubs),
    ])).unwrap();
    assert_eq!(
        table.deal().unwrap_err(),
        DealError::EmptyShoe(EmptyShoeError {
            needed: 6,
            remaining: 3
        })
    );
    assert_eq!(table.phase(), RoundPhase::Betting);
}

#[test]
fn deal_hides_the_dealer_hole_card() {
    let mut table = table_with(&["Ann"]);
    ready(
        &mut table,
        25,
        &[
            card(Rank::Eight, Suit::Hearts), // player
            card(Rank::Ace, Suit::Clubs),    // dealer hole
            card(Rank::Seven, Suit::Hearts), // player
            card(Rank::Six, Suit::Clubs),    // dealer up
        ],
    );

    table.deal().unwrap();
    assert_eq!(table.phase(), RoundPhase::PlayerTurns);
    assert_eq!(table.current_player(), Some(1));

    let dealer = table.dealer().hand();
    assert!(dealer.cards()[0].is_face_down());
    assert_eq!(dealer.total(), 6);
    assert_eq!(table.dealer_up_card(), Some(&card(Rank::Six, Suit::Clubs)));
    assert_eq!(table.player(1).unwrap().hand().total(), 15);

    let dealt_hidden = table.take_events().into_iter().any(|event| {
        matches!(event, TableEvent::CardDealt { card, total: 0, .. } if card.is_face_down())
    });
    assert!(dealt_hidden);
}

#[test]
fn full_round_walks_every_phase() {
    let mut table = table_with(&["Ann"]);
    assert_eq!(table.phase(), RoundPhase::RoundEnd);

    table.start_round().unwrap();
    assert_eq!(table.phase(), RoundPhase::Betting);
    table.place_bet(1, 50).unwrap();
    table.set_shoe(stacked(&[
        card(Rank::Ten, Suit::Hearts),  // player
        card(Rank::Ten, Suit::Clubs),   // dealer hole
        card(Rank::Nine, Suit::Hearts), // player
        card(Rank::Seven, Suit::Clubs), // dealer up
    ])).unwrap();

    assert!(!table.phase().is_round_active());
    table.deal().unwrap();
    assert_eq!(table.phase(), RoundPhase::PlayerTurns);
    assert!(table.phase().is_round_active());
    table.stand(1).unwrap();
    assert_eq!(table.phase(), RoundPhase::DealerTurn);
    assert_eq!(table.current_player(), None);

    let dealer = table.dealer_play().unwrap();
    assert!(dealer.drawn.is_empty());
    assert_eq!(dealer.total, 17);
    assert!(!dealer.bust);
    assert_eq!(table.phase(), RoundPhase::Settlement);

    let result = table.settle().unwrap();
    assert_eq!(table.phase(), RoundPhase::RoundEnd);
    assert_eq!(result.players[0].outcome, HandOutcome::Win);
    assert_eq!(result.players[0].payout, 100);
    assert_eq!(result.players[0].net(), 50);
    assert_eq!(table.player(1).unwrap().bankroll().funds(), Some(550));
    assert_eq!(table.pot(), 0);
    assert_eq!(table.rounds_played(), 1);
}

#[test]
fn player_bust_loses_and_skips_the_dealer() {
    let mut table = table_with(&["Ann"]);
    ready(
        &mut table,
        50,
        &[
            card(Rank::Ten, Suit::Hearts),   // player
            card(Rank::Ten, Suit::Clubs),    // dealer hole
            card(Rank::Six, Suit::Hearts),   // player
            card(Rank::King, Suit::Clubs),   // dealer up
            card(Rank::Nine, Suit::Hearts),  // player hit
        ],
    );

    table.deal().unwrap();
    let drawn = table.hit(1).unwrap();
    assert_eq!(drawn, card(Rank::Nine, Suit::Hearts));
    assert!(table.player(1).unwrap().is_bust());
    assert_eq!(table.pot(), 0);
    assert_eq!(table.house_take(), 100);
    assert_eq!(table.phase(), RoundPhase::Settlement);
    assert_eq!(table.dealer_play().unwrap_err(), ShowdownError::InvalidState);

    let result = table.settle().unwrap();
    assert!(result.dealer_skipped);
    assert_eq!(result.dealer_total, 20);
    assert_eq!(result.players[0].outcome, HandOutcome::Lose);
    assert_eq!(result.players[0].payout, 0);
    assert_eq!(result.players[0].house_share, 100);
    assert_eq!(result.players[0].player_total, 25);
    assert_eq!(table.player(1).unwrap().bankroll().funds(), Some(450));
    assert_eq!(result.house_take(), 100);
    assert_eq!(table.pot(), 0);
}

#[test]
fn dealer_bust_pays_the_full_pot() {
    let mut table = table_with(&["Ann"]);
    ready(
        &mut table,
        50,
        &[
            card(Rank::Ten, Suit::Hearts),  // player
            card(Rank::Ten, Suit::Clubs),   // dealer hole
            card(Rank::Five, Suit::Hearts), // player
            card(Rank::Six, Suit::Clubs),   // dealer up
            card(Rank::Jack, Suit::Clubs),  // dealer draw
        ],
    );

    table.deal().unwrap();
    table.stand(1).unwrap();

    let dealer = table.dealer_play().unwrap();
    assert!(dealer.bust);
    assert_eq!(dealer.total, 26);
    assert_eq!(dealer.drawn, vec![card(Rank::Jack, Suit::Clubs)]);

    let result = table.settle().unwrap();
    assert!(result.dealer_bust);
    assert_eq!(result.players[0].outcome, HandOutcome::Win);
    assert_eq!(result.players[0].payout, 100);
    assert_eq!(table.player(1).unwrap().bankroll().funds(), Some(550));
    assert_eq!(table.house_take(), 0);
}

#[test]
fn push_returns_only_the_players_stake() {
    let mut table = table_with(&["Ann"]);
    ready(
        &mut table,
        50,
        &[
            card(Rank::Ten, Suit::Hearts),   // player
            card(Rank::Nine, Suit::Clubs),   // dealer hole
            card(Rank::Eight, Suit::Hearts), // player
            card(Rank::Nine, Suit::Spades),  // dealer up
        ],
    );

    table.deal().unwrap();
    table.stand(1).unwrap();
    table.dealer_play().unwrap();

    let result = table.settle().unwrap();
    let player = &result.players[0];
    assert_eq!(player.outcome, HandOutcome::Push);
    assert_eq!(player.pot, 100);
    assert_eq!(player.payout, 50);
    assert_eq!(player.house_share, 50);
    assert_eq!(player.net(), 0);
    assert_eq!(table.player(1).unwrap().bankroll().funds(), Some(500));
    assert_eq!(table.house_take(), 50);
    assert_eq!(table.pot(), 0);
}

#[test]
fn dealer_closer_to_21_wins() {
    let mut table = table_with(&["Ann"]);
    ready(
        &mut table,
        50,
        &[
            card(Rank::Ten, Suit::Hearts),   // player
            card(Rank::Ten, Suit::Clubs),    // dealer hole
            card(Rank::Seven, Suit::Hearts), // player
            card(Rank::Nine, Suit::Clubs),   // dealer up
        ],
    );

    let result = table.play_round(&mut Scripted(vec![])).unwrap();
    assert_eq!(result.dealer_total, 19);
    assert_eq!(result.players[0].outcome, HandOutcome::Lose);
    assert_eq!(result.players[0].house_share, 100);
    assert_eq!(table.player(1).unwrap().bankroll().funds(), Some(450));
}

#[test]
fn natural_21_settles_like_any_other_21() {
    let mut table = table_with(&["Ann"]);
    ready(
        &mut table,
        50,
        &[
            card(Rank::Ace, Suit::Hearts),  // player
            card(Rank::Ace, Suit::Clubs),   // dealer hole
            card(Rank::King, Suit::Hearts), // player
            card(Rank::King, Suit::Clubs),  // dealer up
        ],
    );

    let result = table.play_round(&mut Scripted(vec![])).unwrap();
    assert_eq!(result.dealer_total, 21);
    assert_eq!(result.players[0].player_total, 21);
    assert_eq!(result.players[0].outcome, HandOutcome::Push);
    assert_eq!(result.players[0].payout, 50);
}

#[test]
fn dealer_stands_on_soft_17() {
    let mut table = table_with(&["Ann"]);
    ready(
        &mut table,
        25,
        &[
            card(Rank::Ten, Suit::Hearts),  // player
            card(Rank::Ace, Suit::Clubs),   // dealer hole
            card(Rank::Nine, Suit::Hearts), // player
            card(Rank::Six, Suit::Clubs),   // dealer up
        ],
    );

    table.deal().unwrap();
    table.stand(1).unwrap();
    let dealer = table.dealer_play().unwrap();

    assert!(dealer.drawn.is_empty());
    assert_eq!(dealer.total, 17);
    assert!(table.dealer().hand().is_soft());
}

#[test]
fn dealer_draws_until_17() {
    let mut table = table_with(&["Ann"]);
    ready(
        &mut table,
        25,
        &[
            card(Rank::Ten, Suit::Hearts),  // player
            card(Rank::Two, Suit::Clubs),   // dealer hole
            card(Rank::Nine, Suit::Hearts), // player
            card(Rank::Three, Suit::Clubs), // dealer up
            card(Rank::Four, Suit::Clubs),  // dealer draw: 9
            card(Rank::Five, Suit::Clubs),  // dealer draw: 14
            card(Rank::Ace, Suit::Spades),  // dealer draw: soft 25, hard 15
            card(Rank::Two, Suit::Spades),  // dealer draw: 17
            card(Rank::King, Suit::Spades), // never drawn
        ],
    );

    table.deal().unwrap();
    table.stand(1).unwrap();
    let dealer = table.dealer_play().unwrap();

    assert_eq!(dealer.drawn.len(), 4);
    assert_eq!(dealer.total, 17);
    assert!(!dealer.bust);

    let events = table.take_events();
    let hits = events
        .iter()
        .filter(|e| matches!(e, TableEvent::Hit { .. }))
        .count();
    assert_eq!(hits, 4);
    assert!(events.iter().any(|e| matches!(
        e,
        TableEvent::HoleCardRevealed { total: 5, .. }
    )));
}

#[test]
fn dealer_policy_is_deterministic() {
    let draws = [
        card(Rank::Six, Suit::Hearts),   // player
        card(Rank::Three, Suit::Clubs),  // dealer hole
        card(Rank::Five, Suit::Hearts),  // player
        card(Rank::Ace, Suit::Clubs),    // dealer up
        card(Rank::Two, Suit::Spades),   // player hit
        card(Rank::Ace, Suit::Diamonds), // dealer draw
        card(Rank::Seven, Suit::Spades), // dealer draw
        card(Rank::Eight, Suit::Spades), // dealer draw
    ];

    let play = |seed| {
        let mut table = Table::new(TableOptions::default(), ["Ann"], seed).unwrap();
        ready(&mut table, 25, &draws);
        let result = table
            .play_round(&mut Scripted(vec![Decision::Hit]))
            .unwrap();
        let dealer_cards = table.dealer().hand().cards().to_vec();
        (result, dealer_cards)
    };

    let (first, first_cards) = play(1);
    let (second, second_cards) = play(99);
    assert_eq!(first, second);
    assert_eq!(first_cards, second_cards);
    assert!(first.dealer_total >= 17);
}

#[test]
fn multiple_players_settle_independently() {
    let mut table = table_with(&["Ann", "Bo", "Cy"]);
    ready(
        &mut table,
        50,
        &[
            card(Rank::Ten, Suit::Clubs),    // Ann
            card(Rank::Ten, Suit::Hearts),   // Bo
            card(Rank::Ten, Suit::Spades),   // Cy
            card(Rank::Ten, Suit::Diamonds), // dealer hole
            card(Rank::Six, Suit::Clubs),    // Ann
            card(Rank::Five, Suit::Hearts),  // Bo
            card(Rank::King, Suit::Spades),  // Cy
            card(Rank::Six, Suit::Diamonds), // dealer up
            card(Rank::Nine, Suit::Clubs),   // Ann hit
            card(Rank::Jack, Suit::Diamonds), // dealer draw
        ],
    );

    table.deal().unwrap();
    assert_eq!(table.current_player(), Some(1));
    assert_eq!(table.hit(2).unwrap_err(), ActionError::NotYourTurn);
    assert_eq!(table.hit(7).unwrap_err(), ActionError::PlayerNotFound);

    table.hit(1).unwrap();
    assert_eq!(table.current_player(), Some(2));
    assert_eq!(cards_on_table(&table), DECK_SIZE);

    table.stand(2).unwrap();
    table.stand(3).unwrap();
    assert_eq!(table.phase(), RoundPhase::DealerTurn);

    assert!(table.dealer_play().unwrap().bust);
    let result = table.settle().unwrap();

    let outcomes: Vec<HandOutcome> = result.players.iter().map(|p| p.outcome).collect();
    assert_eq!(
        outcomes,
        vec![HandOutcome::Lose, HandOutcome::Win, HandOutcome::Win]
    );
    assert_eq!(result.players[0].player_id, 1);
    assert_eq!(table.player(1).unwrap().bankroll().funds(), Some(450));
    assert_eq!(table.player(2).unwrap().bankroll().funds(), Some(550));
    assert_eq!(table.player(3).unwrap().bankroll().funds(), Some(550));
    assert_eq!(table.house_take(), 100);
    assert_eq!(table.pot(), 0);
    assert_eq!(cards_on_table(&table), DECK_SIZE);
}

#[test]
fn actions_outside_player_turns_are_rejected() {
    let mut table = table_with(&["Ann"]);
    assert_eq!(table.hit(1).unwrap_err(), ActionError::InvalidState);
    assert_eq!(table.stand(1).unwrap_err(), ActionError::InvalidState);
    assert_eq!(table.settle().unwrap_err(), ShowdownError::InvalidState);

    table.start_round().unwrap();
    assert_eq!(table.start_round().unwrap_err(), RoundError::InvalidState);
    assert_eq!(table.hit(1).unwrap_err(), ActionError::InvalidState);
}

#[test]
fn hit_with_empty_shoe_returns_error() {
    let mut table = table_with(&["Ann"]);
    table.start_round().unwrap();
    table.place_bet(1, 100).unwrap();
    table.set_shoe(Shoe::from_cards(vec![
        card(Rank::Five, Suit::Hearts),
        card(Rank::Nine, Suit::Clubs),
        card(Rank::Six, Suit::Hearts),
        card(Rank::Seven, Suit::Clubs),
    ])).unwrap();

    table.deal().unwrap();
    assert_eq!(
        table.hit(1).unwrap_err(),
        ActionError::EmptyShoe(EmptyShoeError {
            needed: 1,
            remaining: 0
        })
    );

    table.abort_round();
    assert_eq!(table.phase(), RoundPhase::RoundEnd);
    assert_eq!(table.pot(), 0);
    assert_eq!(table.player(1).unwrap().bankroll().funds(), Some(500));
}

#[test]
fn broke_players_are_eliminated() {
    let options = TableOptions::default()
        .with_minimum_bet(50)
        .with_starting_bankroll(80);
    let mut table = Table::new(options, ["Ann", "Bo"], 5).unwrap();
    table.start_round().unwrap();
    table.place_bet(1, 50).unwrap();
    table.place_bet(2, 50).unwrap();
    table.set_shoe(stacked(&[
        card(Rank::Ten, Suit::Clubs),   // Ann
        card(Rank::Ten, Suit::Hearts),  // Bo
        card(Rank::Ten, Suit::Spades),  // dealer hole
        card(Rank::Five, Suit::Clubs),  // Ann
        card(Rank::Ace, Suit::Hearts),  // Bo
        card(Rank::Nine, Suit::Spades), // dealer up
    ])).unwrap();

    let result = table.play_round(&mut Scripted(vec![])).unwrap();
    assert_eq!(result.players[0].outcome, HandOutcome::Lose);
    assert_eq!(result.players[1].outcome, HandOutcome::Win);

    assert_eq!(result.eliminated.len(), 1);
    assert_eq!(result.eliminated[0].name, "Ann");
    assert_eq!(result.eliminated[0].bankroll, 30);
    assert_eq!(table.players().len(), 1);
    assert!(table.player(1).is_none());
    assert_eq!(cards_on_table(&table), DECK_SIZE);
    assert!(
        table
            .take_events()
            .iter()
            .any(|e| matches!(e, TableEvent::Eliminated { bankroll: 30, .. }))
    );
}

#[test]
fn session_ends_when_no_players_remain() {
    let options = TableOptions::default()
        .with_minimum_bet(50)
        .with_starting_bankroll(50);
    let mut table = Table::new(options, ["Ann"], 5).unwrap();
    table.start_round().unwrap();
    table.place_bet(1, 50).unwrap();
    table.set_shoe(stacked(&[
        card(Rank::Ten, Suit::Clubs),   // Ann
        card(Rank::Ten, Suit::Spades),  // dealer hole
        card(Rank::Six, Suit::Clubs),   // Ann
        card(Rank::Nine, Suit::Spades), // dealer up
    ])).unwrap();

    let result = table.play_round(&mut Scripted(vec![])).unwrap();
    assert_eq!(result.players[0].bankroll, 0);
    assert!(table.is_over());
    assert_eq!(table.start_round().unwrap_err(), RoundError::NoPlayers);
}

#[test]
fn next_round_collects_every_card() {
    let mut table = table_with(&["Ann", "Bo"]);
    for _ in 0..5 {
        table.start_round().unwrap();
        assert_eq!(table.shoe().len(), DECK_SIZE);
        assert_eq!(table.pot(), 0);
        table.place_bet(1, 25).unwrap();
        table.place_bet(2, 25).unwrap();

        let result = table.play_round(&mut Scripted(vec![Decision::Hit])).unwrap();
        assert_eq!(result.players.len(), 2);
        assert_eq!(table.pot(), 0);
        assert_eq!(cards_on_table(&table), DECK_SIZE);
        assert!(table.dealer().hand().cards().iter().all(|c| !c.is_face_down()));
    }
    assert_eq!(table.rounds_played(), 5);
}

#[test]
fn play_round_asks_the_policy_for_each_decision() {
    let mut table = table_with(&["Ann"]);
    ready(
        &mut table,
        25,
        &[
            card(Rank::Two, Suit::Hearts),   // player
            card(Rank::Ten, Suit::Clubs),    // dealer hole
            card(Rank::Three, Suit::Hearts), // player
            card(Rank::Eight, Suit::Clubs),  // dealer up
            card(Rank::Four, Suit::Hearts),  // hit: 9
            card(Rank::Five, Suit::Hearts),  // hit: 14
            card(Rank::Six, Suit::Hearts),   // hit: 20
        ],
    );

    let mut policy = Scripted(vec![Decision::Hit, Decision::Hit, Decision::Hit]);
    let result = table.play_round(&mut policy).unwrap();

    assert!(policy.0.is_empty());
    assert_eq!(result.players[0].player_total, 20);
    assert_eq!(result.dealer_total, 18);
    assert_eq!(result.players[0].outcome, HandOutcome::Win);
}

#[test]
fn bets_too_large_to_match_are_rejected() {
    let options = TableOptions::default().with_starting_bankroll(usize::MAX);
    let mut table = Table::new(options, ["Ann"], 1).unwrap();
    table.start_round().unwrap();

    assert_eq!(
        table.place_bet(1, usize::MAX / 2 + 1).unwrap_err(),
        BetError::TooLarge {
            maximum: usize::MAX / 2
        }
    );
    assert_eq!(table.player(1).unwrap().bankroll().funds(), Some(usize::MAX));

    assert_eq!(table.place_bet(1, usize::MAX / 2), Ok(usize::MAX - 1));
    table
        .set_shoe(stacked(&[
            card(Rank::Ten, Suit::Hearts),  // player
            card(Rank::Ten, Suit::Clubs),   // dealer hole
            card(Rank::Nine, Suit::Hearts), // player
            card(Rank::Seven, Suit::Clubs), // dealer up
        ]))
        .unwrap();

    let result = table.play_round(&mut Scripted(vec![])).unwrap();
    let player = &result.players[0];
    assert_eq!(player.outcome, HandOutcome::Win);
    assert_eq!(player.payout, usize::MAX - 1);
    assert_eq!(player.net(), isize::MAX);
    assert_eq!(table.player(1).unwrap().bankroll().funds(), Some(usize::MAX));
    assert_eq!(table.pot(), 0);
}

#[test]
fn net_saturates_at_isize_bounds() {
    let mut result = PlayerResult {
        player_id: 1,
        name: "Ann".to_string(),
        outcome: HandOutcome::Lose,
        bet: usize::MAX,
        pot: 0,
        payout: 0,
        house_share: 0,
        player_total: 25,
        bankroll: 0,
    };
    assert_eq!(result.net(), isize::MIN);

    result.outcome = HandOutcome::Win;
    result.bet = 0;
    result.payout = usize::MAX;
    assert_eq!(result.net(), isize::MAX);

    result.bet = 50;
    result.payout = 0;
    assert_eq!(result.net(), -50);
}

#[test]
fn shoe_can_only_be_replaced_before_the_deal() {
    let mut table = table_with(&["Ann"]);
    assert_eq!(
        table.set_shoe(Shoe::new()).unwrap_err(),
        RoundError::InvalidState
    );

    table.start_round().unwrap();
    table.place_bet(1, 25).unwrap();
    table.set_shoe(Shoe::new()).unwrap();
    table.deal().unwrap();
    assert_eq!(
        table.set_shoe(Shoe::new()).unwrap_err(),
        RoundError::InvalidState
    );

    table.stand(1).unwrap();
    if table.phase() == RoundPhase::DealerTurn {
        table.dealer_play().unwrap();
    }
    table.settle().unwrap();
    assert_eq!(
        table.set_shoe(Shoe::new()).unwrap_err(),
        RoundError::InvalidState
    );

    table.start_round().unwrap();
    assert_eq!(table.shoe().len(), DECK_SIZE);
    assert_eq!(cards_on_table(&table), DECK_SIZE);
}
