pub mod lordship;
pub mod planet;
pub mod sign;
pub mod significators;
pub mod sublord;

pub use lordship::{Lord, LordshipResolver, LordshipTable, LordshipTriple, RawLordship};
pub use planet::Planet;
pub use sign::Sign;
pub use significators::{
    parse_occupancy, parse_occupants, Category, HouseSignificators, Occupancy,
    PlanetSignificators, SignificatorTable,
};
pub use sublord::{KpSubLordTable, SubDivision};
