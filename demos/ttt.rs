//! A definition of the game Tic-Tac-Toe using the library, for use in tests
//! and demos.
//!
//! X is the Maximizer and moves first. A won game has utility +1 or -1, a
//! draw 0; perfect play from the empty board is always a draw.
#![allow(dead_code)]

use gametree::{Game, Player, Utility};

use std::default::Default;
use std::fmt::{Display, Formatter, Result};

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
#[repr(u8)]
pub enum Square {
    Empty,
    X,
    O,
}

impl Square {
    fn invert(&self) -> Self {
        match *self {
            Square::Empty => Square::Empty,
            Square::X => Square::O,
            Square::O => Square::X,
        }
    }
}

impl Default for Square {
    fn default() -> Square {
        Square::Empty
    }
}

impl Display for Square {
    fn fmt(&self, f: &mut Formatter) -> Result {
        write!(
            f,
            "{}",
            match *self {
                Square::Empty => ' ',
                Square::X => 'X',
                Square::O => 'O',
            }
        )
    }
}

#[derive(Clone, PartialEq, Eq)]
pub struct Board {
    squares: [Square; 9],
    to_move: Square,
}

impl Default for Board {
    fn default() -> Board {
        Board { squares: [Square::default(); 9], to_move: Square::X }
    }
}

impl Display for Board {
    fn fmt(&self, f: &mut Formatter) -> Result {
        writeln!(f, "{} | {} | {}", self.squares[0], self.squares[1], self.squares[2])?;
        writeln!(f, "{} | {} | {}", self.squares[3], self.squares[4], self.squares[5])?;
        writeln!(f, "{} | {} | {}", self.squares[6], self.squares[7], self.squares[8])?;
        Ok(())
    }
}

const LINES: [[usize; 3]; 8] = [
    // horizontal
    [0, 1, 2],
    [3, 4, 5],
    [6, 7, 8],
    // vertical
    [0, 3, 6],
    [1, 4, 7],
    [2, 5, 8],
    // diagonal
    [0, 4, 8],
    [2, 4, 6],
];

pub struct TicTacToe;

impl Game for TicTacToe {
    type S = Board;
    type M = Place;

    fn player_to_move(b: &Board) -> Player {
        match b.to_move {
            Square::X => Player::Maximizer,
            _ => Player::Minimizer,
        }
    }

    fn generate_moves(b: &Board, moves: &mut Vec<Place>) {
        for i in 0..b.squares.len() {
            if b.squares[i] == Square::Empty {
                moves.push(Place { i: i as u8 });
            }
        }
    }

    fn get_utility(b: &Board) -> Option<Utility> {
        for line in LINES.iter() {
            let s = b.squares[line[0]];
            if s != Square::Empty && s == b.squares[line[1]] && s == b.squares[line[2]] {
                return Some(match s {
                    Square::X => 1,
                    _ => -1,
                });
            }
        }
        if b.squares.iter().all(|s| *s != Square::Empty) {
            // Full board without a line is a draw.
            Some(0)
        } else {
            None
        }
    }

    fn apply(b: &Board, m: Place) -> Board {
        let mut next = b.clone();
        next.squares[m.i as usize] = next.to_move;
        next.to_move = next.to_move.invert();
        next
    }
}

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct Place {
    i: u8,
}

impl Display for Place {
    fn fmt(&self, f: &mut Formatter) -> Result {
        write!(f, "@{}", self.i)
    }
}

fn main() {
    use gametree::{alpha_beta, minimax, AlphaBeta, Minimax, Strategy};

    env_logger::init();

    let mut b = Board::default();
    while TicTacToe::get_utility(&b).is_none() {
        println!("{}", b);
        let player = TicTacToe::player_to_move(&b);
        let result = match player {
            Player::Maximizer => alpha_beta::<TicTacToe>(&b),
            Player::Minimizer => minimax::<TicTacToe>(&b),
        }
        .expect("tic-tac-toe never violates the game contract");
        let m = result.best_move.unwrap();
        println!("{:?} plays {} (value {})", player, m, result.value);
        b = TicTacToe::apply(&b, m);
    }
    println!("{}", b);
    println!("final utility: {}", TicTacToe::get_utility(&b).unwrap());

    // How much work the pruning saves on the opening position.
    let empty = Board::default();
    let mut exhaustive = Minimax::<TicTacToe>::new();
    exhaustive.choose_move(&empty);
    let mut pruning = AlphaBeta::<TicTacToe>::new();
    pruning.choose_move(&empty);
    println!("{}", exhaustive.stats());
    println!("{}", pruning.stats());
}
