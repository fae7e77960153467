//! Typed Row Binding Example
//!
//! Binds CSV rows onto a plain struct through a custom RowSink, using the
//! bind module's field conversions. Empty cells keep the struct's defaults.

use csvpush::{parse_field, CsvParser, FromField, RowSink};

#[derive(Debug, Default)]
struct Unit {
    id: u32,
    name: String,
    health: f32,
    flying: bool,
}

#[derive(Default)]
struct UnitLoader {
    units: Vec<Unit>,
    current: Unit,
}

impl RowSink for UnitLoader {
    fn start(&mut self) {
        self.current = Unit {
            health: 100.0, // default when the column is empty
            ..Unit::default()
        };
    }

    fn value(&mut self, key: &str, value: &str) -> bool {
        if value.is_empty() {
            return true;
        }
        match key {
            "id" => assign(value, &mut self.current.id),
            "name" => assign(value, &mut self.current.name),
            "health" => assign(value, &mut self.current.health),
            "flying" => assign(value, &mut self.current.flying),
            _ => true, // unknown columns are fine
        }
    }

    fn end(&mut self) {
        self.units.push(std::mem::take(&mut self.current));
    }
}

fn assign<T: FromField>(value: &str, slot: &mut T) -> bool {
    match parse_field(value) {
        Some(v) => {
            *slot = v;
            true
        }
        None => false, // bad cell cancels the parse
    }
}

fn main() {
    let input = "\
id,name,health,flying
1,Knight,250,no
2,Gargoyle,80,yes
3,Peasant,,n
";

    let mut loader = UnitLoader::default();
    let mut parser = CsvParser::new();

    match parser.parse(input, &mut loader) {
        Ok(()) => {
            println!("Loaded {} units:", loader.units.len());
            for unit in &loader.units {
                println!("  {:?}", unit);
            }
        }
        Err(e) => println!("Load failed: {}", e),
    }
}
