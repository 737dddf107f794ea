use rust_decimal::Decimal;
use squadforge::domain::{Player, Position, SquadRules};

/// Best squad found by exhaustive enumeration: total score, total price and
/// sorted ids.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Exhaustive {
    pub score: Decimal,
    pub price: Decimal,
    pub ids: Vec<u32>,
}

fn combinations(n: usize, k: usize) -> Vec<Vec<usize>> {
    fn go(start: usize, n: usize, k: usize, current: &mut Vec<usize>, out: &mut Vec<Vec<usize>>) {
        if current.len() == k {
            out.push(current.clone());
            return;
        }
        for i in start..n {
            current.push(i);
            go(i + 1, n, k, current, out);
            current.pop();
        }
    }
    let mut out = Vec::new();
    go(0, n, k, &mut Vec::new(), &mut out);
    out
}

/// Enumerate every quota-valid squad and keep the best under the budget and
/// team cap. Highest score wins, then lowest price, then smallest id list.
pub fn best_squad(pool: &[Player], rules: &SquadRules) -> Option<Exhaustive> {
    let groups: Vec<Vec<&Player>> = Position::ALL
        .iter()
        .map(|position| pool.iter().filter(|p| p.position() == *position).collect())
        .collect();
    let picks: Vec<Vec<Vec<usize>>> = Position::ALL
        .iter()
        .zip(&groups)
        .map(|(position, group)| combinations(group.len(), rules.quota(*position) as usize))
        .collect();

    let mut best: Option<Exhaustive> = None;
    let mut chosen: Vec<&Player> = Vec::new();
    search(&groups, &picks, 0, &mut chosen, rules, &mut best);
    best
}

fn search<'a>(
    groups: &[Vec<&'a Player>],
    picks: &[Vec<Vec<usize>>],
    depth: usize,
    chosen: &mut Vec<&'a Player>,
    rules: &SquadRules,
    best: &mut Option<Exhaustive>,
) {
    if depth == groups.len() {
        consider(chosen, rules, best);
        return;
    }
    for pick in &picks[depth] {
        let before = chosen.len();
        chosen.extend(pick.iter().map(|i| groups[depth][*i]));
        search(groups, picks, depth + 1, chosen, rules, best);
        chosen.truncate(before);
    }
}

fn consider(chosen: &[&Player], rules: &SquadRules, best: &mut Option<Exhaustive>) {
    let price: Decimal = chosen.iter().map(|p| p.price()).sum();
    if price > rules.budget {
        return;
    }
    let over_cap = chosen
        .iter()
        .any(|p| chosen.iter().filter(|q| q.team() == p.team()).count() as u32 > rules.team_cap);
    if over_cap {
        return;
    }
    let score: Decimal = chosen.iter().map(|p| p.score()).sum();
    let mut ids: Vec<u32> = chosen.iter().map(|p| p.id().value()).collect();
    ids.sort_unstable();

    let better = match best {
        None => true,
        Some(b) => {
            score > b.score
                || (score == b.score && price < b.price)
                || (score == b.score && price == b.price && ids < b.ids)
        }
    };
    if better {
        *best = Some(Exhaustive { score, price, ids });
    }
}
