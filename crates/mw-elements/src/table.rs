//! Static periodic table data and the in-memory provider built on it.

use std::collections::HashMap;

use crate::error::{ElementError, ElementResult};
use crate::provider::AtomicWeightProvider;

/// One element of the periodic table.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ElementRecord {
    pub symbol: &'static str,
    pub name: &'static str,
    pub atomic_number: u8,
    /// Standard atomic weight [amu]. Conventional mass number of the most
    /// stable isotope for elements without a stable one.
    pub atomic_weight: f64,
}

impl ElementRecord {
    /// Case-insensitive substring match against symbol and name.
    pub fn matches_query(&self, query: &str) -> bool {
        let query = query.trim().to_ascii_lowercase();
        if query.is_empty() {
            return true;
        }

        self.symbol.to_ascii_lowercase().contains(&query)
            || self.name.to_ascii_lowercase().contains(&query)
    }
}

const fn record(
    symbol: &'static str,
    name: &'static str,
    atomic_number: u8,
    atomic_weight: f64,
) -> ElementRecord {
    ElementRecord {
        symbol,
        name,
        atomic_number,
        atomic_weight,
    }
}

const PERIODIC_TABLE: [ElementRecord; 118] = [
    record("H", "Hydrogen", 1, 1.008),
    record("He", "Helium", 2, 4.002602),
    record("Li", "Lithium", 3, 6.94),
    record("Be", "Beryllium", 4, 9.012183),
    record("B", "Boron", 5, 10.81),
    record("C", "Carbon", 6, 12.011),
    record("N", "Nitrogen", 7, 14.007),
    record("O", "Oxygen", 8, 15.999),
    record("F", "Fluorine", 9, 18.998403),
    record("Ne", "Neon", 10, 20.1797),
    record("Na", "Sodium", 11, 22.989769),
    record("Mg", "Magnesium", 12, 24.305),
    record("Al", "Aluminium", 13, 26.981538),
    record("Si", "Silicon", 14, 28.085),
    record("P", "Phosphorus", 15, 30.973762),
    record("S", "Sulfur", 16, 32.06),
    record("Cl", "Chlorine", 17, 35.45),
    record("Ar", "Argon", 18, 39.95),
    record("K", "Potassium", 19, 39.0983),
    record("Ca", "Calcium", 20, 40.078),
    record("Sc", "Scandium", 21, 44.955908),
    record("Ti", "Titanium", 22, 47.867),
    record("V", "Vanadium", 23, 50.9415),
    record("Cr", "Chromium", 24, 51.9961),
    record("Mn", "Manganese", 25, 54.938044),
    record("Fe", "Iron", 26, 55.845),
    record("Co", "Cobalt", 27, 58.933194),
    record("Ni", "Nickel", 28, 58.6934),
    record("Cu", "Copper", 29, 63.546),
    record("Zn", "Zinc", 30, 65.38),
    record("Ga", "Gallium", 31, 69.723),
    record("Ge", "Germanium", 32, 72.630),
    record("As", "Arsenic", 33, 74.921595),
    record("Se", "Selenium", 34, 78.971),
    record("Br", "Bromine", 35, 79.904),
    record("Kr", "Krypton", 36, 83.798),
    record("Rb", "Rubidium", 37, 85.4678),
    record("Sr", "Strontium", 38, 87.62),
    record("Y", "Yttrium", 39, 88.90584),
    record("Zr", "Zirconium", 40, 91.224),
    record("Nb", "Niobium", 41, 92.90637),
    record("Mo", "Molybdenum", 42, 95.95),
    record("Tc", "Technetium", 43, 97.907),
    record("Ru", "Ruthenium", 44, 101.07),
    record("Rh", "Rhodium", 45, 102.9055),
    record("Pd", "Palladium", 46, 106.42),
    record("Ag", "Silver", 47, 107.8682),
    record("Cd", "Cadmium", 48, 112.414),
    record("In", "Indium", 49, 114.818),
    record("Sn", "Tin", 50, 118.710),
    record("Sb", "Antimony", 51, 121.760),
    record("Te", "Tellurium", 52, 127.60),
    record("I", "Iodine", 53, 126.90447),
    record("Xe", "Xenon", 54, 131.293),
    record("Cs", "Caesium", 55, 132.905452),
    record("Ba", "Barium", 56, 137.327),
    record("La", "Lanthanum", 57, 138.90547),
    record("Ce", "Cerium", 58, 140.116),
    record("Pr", "Praseodymium", 59, 140.90766),
    record("Nd", "Neodymium", 60, 144.242),
    record("Pm", "Promethium", 61, 144.913),
    record("Sm", "Samarium", 62, 150.36),
    record("Eu", "Europium", 63, 151.964),
    record("Gd", "Gadolinium", 64, 157.25),
    record("Tb", "Terbium", 65, 158.92535),
    record("Dy", "Dysprosium", 66, 162.500),
    record("Ho", "Holmium", 67, 164.93033),
    record("Er", "Erbium", 68, 167.259),
    record("Tm", "Thulium", 69, 168.93422),
    record("Yb", "Ytterbium", 70, 173.045),
    record("Lu", "Lutetium", 71, 174.9668),
    record("Hf", "Hafnium", 72, 178.49),
    record("Ta", "Tantalum", 73, 180.94788),
    record("W", "Tungsten", 74, 183.84),
    record("Re", "Rhenium", 75, 186.207),
    record("Os", "Osmium", 76, 190.23),
    record("Ir", "Iridium", 77, 192.217),
    record("Pt", "Platinum", 78, 195.084),
    record("Au", "Gold", 79, 196.966569),
    record("Hg", "Mercury", 80, 200.592),
    record("Tl", "Thallium", 81, 204.38),
    record("Pb", "Lead", 82, 207.2),
    record("Bi", "Bismuth", 83, 208.98040),
    record("Po", "Polonium", 84, 208.982),
    record("At", "Astatine", 85, 209.987),
    record("Rn", "Radon", 86, 222.018),
    record("Fr", "Francium", 87, 223.020),
    record("Ra", "Radium", 88, 226.025),
    record("Ac", "Actinium", 89, 227.028),
    record("Th", "Thorium", 90, 232.0377),
    record("Pa", "Protactinium", 91, 231.03588),
    record("U", "Uranium", 92, 238.02891),
    record("Np", "Neptunium", 93, 237.048),
    record("Pu", "Plutonium", 94, 244.064),
    record("Am", "Americium", 95, 243.061),
    record("Cm", "Curium", 96, 247.070),
    record("Bk", "Berkelium", 97, 247.070),
    record("Cf", "Californium", 98, 251.080),
    record("Es", "Einsteinium", 99, 252.083),
    record("Fm", "Fermium", 100, 257.095),
    record("Md", "Mendelevium", 101, 258.098),
    record("No", "Nobelium", 102, 259.101),
    record("Lr", "Lawrencium", 103, 262.110),
    record("Rf", "Rutherfordium", 104, 267.122),
    record("Db", "Dubnium", 105, 268.126),
    record("Sg", "Seaborgium", 106, 271.134),
    record("Bh", "Bohrium", 107, 270.133),
    record("Hs", "Hassium", 108, 269.134),
    record("Mt", "Meitnerium", 109, 278.156),
    record("Ds", "Darmstadtium", 110, 281.165),
    record("Rg", "Roentgenium", 111, 282.169),
    record("Cn", "Copernicium", 112, 285.177),
    record("Nh", "Nihonium", 113, 286.182),
    record("Fl", "Flerovium", 114, 289.190),
    record("Mc", "Moscovium", 115, 290.196),
    record("Lv", "Livermorium", 116, 293.204),
    record("Ts", "Tennessine", 117, 294.211),
    record("Og", "Oganesson", 118, 294.214),
];

/// All elements in atomic-number order.
pub fn periodic_table() -> &'static [ElementRecord] {
    &PERIODIC_TABLE
}

/// Elements whose symbol or name matches the query, in atomic-number order.
pub fn filter_periodic_table(query: &str) -> Vec<&'static ElementRecord> {
    periodic_table()
        .iter()
        .filter(|entry| entry.matches_query(query))
        .collect()
}

/// In-memory [`AtomicWeightProvider`] over the static element table.
///
/// Immutable after construction; one instance can be shared across threads.
#[derive(Debug, Clone)]
pub struct PeriodicTable {
    by_symbol: HashMap<&'static str, &'static ElementRecord>,
}

impl PeriodicTable {
    pub fn new() -> Self {
        let by_symbol = PERIODIC_TABLE
            .iter()
            .map(|entry| (entry.symbol, entry))
            .collect();
        Self { by_symbol }
    }

    /// Look up an element by exact symbol.
    pub fn get(&self, symbol: &str) -> Option<&'static ElementRecord> {
        self.by_symbol.get(symbol).copied()
    }
}

impl Default for PeriodicTable {
    fn default() -> Self {
        Self::new()
    }
}

impl AtomicWeightProvider for PeriodicTable {
    fn atomic_weight(&self, symbol: &str) -> ElementResult<f64> {
        match self.get(symbol) {
            Some(record) => Ok(record.atomic_weight),
            None => Err(ElementError::UnknownElement {
                symbol: symbol.to_string(),
            }),
        }
    }
}
