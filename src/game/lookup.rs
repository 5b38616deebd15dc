//! Small sequence helpers used by the engine.

use crate::cards::Card;
use crate::core::id::CardId;

/// Position of the first card with `id`, scanning in sequence order.
///
/// Ids are unique by construction; if they were not, the first match wins.
pub fn index_of<'a, C: 'a>(cards: impl IntoIterator<Item = &'a Card<C>>, id: CardId) -> Option<usize> {
    for (index, card) in cards.into_iter().enumerate() {
        if card.id() == id {
            return Some(index);
        }
    }
    None
}

/// The single item of `items`, or `None` if there are zero or several.
pub fn only<I: IntoIterator>(items: I) -> Option<I::Item> {
    let mut items = items.into_iter();
    let first = items.next()?;
    match items.next() {
        Some(_) => None,
        None => Some(first),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_index_of() {
        let cards = vec![
            Card::new(CardId(4), 'A'),
            Card::new(CardId(1), 'B'),
            Card::new(CardId(7), 'A'),
        ];

        assert_eq!(index_of(&cards, CardId(4)), Some(0));
        assert_eq!(index_of(&cards, CardId(7)), Some(2));
        assert_eq!(index_of(&cards, CardId(99)), None);
    }

    #[test]
    fn test_index_of_duplicate_ids_first_wins() {
        let cards = vec![
            Card::new(CardId(0), 'A'),
            Card::new(CardId(3), 'B'),
            Card::new(CardId(3), 'C'),
        ];

        assert_eq!(index_of(&cards, CardId(3)), Some(1));
    }

    #[test]
    fn test_index_of_empty() {
        let cards: Vec<Card<char>> = Vec::new();
        assert_eq!(index_of(&cards, CardId(0)), None);
    }

    #[test]
    fn test_only() {
        assert_eq!(only(Vec::<u8>::new()), None);
        assert_eq!(only(vec![5]), Some(5));
        assert_eq!(only(vec![5, 6]), None);
        assert_eq!(only((0..10).filter(|n| n % 7 == 3)), Some(3));
    }
}
