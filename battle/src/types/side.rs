//! Side (player) state

use super::pokemon::Battler;

/// One side of a single battle
#[derive(Debug, Clone, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SideState {
    /// Pokemon on this side (party order)
    pub pokemon: Vec<Battler>,

    /// Index of the battler currently on the field
    pub active_index: Option<usize>,
}

impl SideState {
    /// A side whose first member is active
    pub fn new(pokemon: Vec<Battler>) -> Self {
        let active_index = if pokemon.is_empty() { None } else { Some(0) };
        Self {
            pokemon,
            active_index,
        }
    }

    /// A side showing a single battler, as the opponent's side is seen
    pub fn single(battler: Battler) -> Self {
        Self::new(vec![battler])
    }

    pub fn with_active(mut self, index: usize) -> Self {
        self.active_index = Some(index);
        self
    }

    /// Get the active Pokemon
    pub fn active(&self) -> Option<&Battler> {
        self.active_index.and_then(|idx| self.pokemon.get(idx))
    }

    /// Get the active Pokemon mutably
    pub fn active_mut(&mut self) -> Option<&mut Battler> {
        let idx = self.active_index?;
        self.pokemon.get_mut(idx)
    }

    /// Iterate over bench Pokemon (not active, not fainted)
    pub fn bench(&self) -> impl Iterator<Item = (usize, &Battler)> {
        let active = self.active_index;
        self.pokemon
            .iter()
            .enumerate()
            .filter(move |(idx, poke)| Some(*idx) != active && poke.is_alive())
    }

    /// Whether `index` names a healthy, inactive party member
    pub fn can_switch_to(&self, index: usize) -> bool {
        self.active_index != Some(index) && self.pokemon.get(index).is_some_and(Battler::is_alive)
    }

    /// Count non-fainted Pokemon
    pub fn alive_count(&self) -> usize {
        self.pokemon.iter().filter(|p| p.is_alive()).count()
    }

    /// Count fainted Pokemon
    pub fn fainted_count(&self) -> usize {
        self.pokemon.iter().filter(|p| p.is_fainted()).count()
    }

    /// Get a Pokemon by index
    pub fn get_pokemon(&self, index: usize) -> Option<&Battler> {
        self.pokemon.get(index)
    }

    /// Find a party member by personality value
    pub fn find_by_personality(&self, personality: u32) -> Option<usize> {
        self.pokemon.iter().position(|p| p.personality == personality)
    }

    /// Make `index` the active battler, clearing the outgoing one's combat state
    pub fn switch_to(&mut self, index: usize) -> bool {
        if !self.can_switch_to(index) {
            return false;
        }
        if let Some(current) = self.active_mut() {
            current.on_switch_out();
        }
        self.active_index = Some(index);
        true
    }
}
