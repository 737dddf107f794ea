use rust_decimal_macros::dec;
use squadforge::domain::{Player, Position};
use squadforge::testkit::domain::named;

/// Twenty players where both the budget and the team cap bind.
///
/// The unconstrained best squad takes a fourth ARS player; the best valid
/// squad costs exactly 100.0, scores 79.2 and starts in 4-4-2.
pub fn twenty_player_pool() -> Vec<Player> {
    use Position::{Defender as D, Forward as F, Goalkeeper as G, Midfielder as M};
    vec![
        named(1, "Raya", G, "ARS", dec!(5.5), dec!(4.8)),
        named(2, "Sanchez", G, "CHE", dec!(4.5), dec!(4.1)),
        named(3, "Kelleher", G, "LIV", dec!(4.0), dec!(3.0)),
        named(4, "Alexander-Arnold", D, "LIV", dec!(6.5), dec!(5.9)),
        named(5, "Van Dijk", D, "LIV", dec!(6.0), dec!(5.6)),
        named(6, "Saliba", D, "ARS", dec!(5.5), dec!(5.0)),
        named(7, "Gvardiol", D, "MCI", dec!(5.0), dec!(4.4)),
        named(8, "Colwill", D, "CHE", dec!(4.5), dec!(4.7)),
        named(9, "Porro", D, "TOT", dec!(4.5), dec!(3.6)),
        named(10, "Branthwaite", D, "EVE", dec!(4.0), dec!(3.1)),
        named(11, "Foden", M, "MCI", dec!(12.5), dec!(8.9)),
        named(12, "Salah", M, "LIV", dec!(13.0), dec!(8.6)),
        named(13, "Saka", M, "ARS", dec!(8.5), dec!(6.7)),
        named(14, "Maddison", M, "TOT", dec!(7.5), dec!(6.1)),
        named(15, "Palmer", M, "CHE", dec!(6.0), dec!(4.9)),
        named(16, "McNeil", M, "EVE", dec!(5.0), dec!(3.8)),
        named(17, "Haaland", F, "MCI", dec!(14.0), dec!(8.3)),
        named(18, "Havertz", F, "ARS", dec!(8.0), dec!(6.2)),
        named(19, "Nunez", F, "LIV", dec!(7.5), dec!(6.0)),
        named(20, "Solanke", F, "TOT", dec!(5.0), dec!(2.5)),
    ]
}

pub const TWENTY_SQUAD: [u32; 15] = [1, 2, 5, 6, 7, 8, 9, 11, 12, 14, 15, 16, 18, 19, 20];
pub const TWENTY_STARTERS: [u32; 11] = [1, 5, 6, 7, 8, 11, 12, 14, 15, 18, 19];
pub const TWENTY_BENCH: [u32; 4] = [2, 9, 16, 20];
