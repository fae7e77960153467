//! Push Parsing Examples
//!
//! Demonstrates the callback event protocol:
//! - Collecting rows with the ready-made RowCollector
//! - Writing a custom RowSink
//! - Title/data row offsets for documents with preamble
//! - Cancelling a parse from the sink

use csvpush::{CsvError, CsvParser, RowCollector, RowSink};

fn main() {
    println!("=== Push Parsing Examples ===\n");

    // Example 1: Collect rows into ordered maps
    println!("1. Collecting rows...");
    {
        let input = "name,age,city\nAnn,30,Oslo\nBen,25,Lima\n";
        let mut collector = RowCollector::new();
        let mut parser = CsvParser::new();
        parser.parse(input, &mut collector).unwrap();

        println!("   Titles: {:?}", parser.titles());
        for row in collector.rows() {
            println!("   {:?}", row);
        }
    }

    // Example 2: Custom sink streaming events
    println!("\n2. Custom sink...");
    {
        struct Printer;

        impl RowSink for Printer {
            fn start(&mut self) {
                print!("   row:");
            }
            fn value(&mut self, key: &str, value: &str) -> bool {
                print!(" {}={}", key, value);
                true
            }
            fn end(&mut self) {
                println!();
            }
        }

        let mut parser = CsvParser::new();
        parser.parse("a,b\n1,2\n3,4\n", &mut Printer).unwrap();
    }

    // Example 3: Preamble line, units row between titles and data
    println!("\n3. Title and data row offsets...");
    {
        let input = "exported by tool v2\nname,height\n(text),(meters)\nAnn,1.7\n";
        let mut collector = RowCollector::new();
        let mut parser = CsvParser::new().title_row(2).first_data_row(4);
        parser.parse(input, &mut collector).unwrap();

        for row in collector.rows() {
            println!("   {:?}", row);
        }
    }

    // Example 4: Quoted fields and graceful degradation
    println!("\n4. Quoting...");
    {
        let input = "text\n\"a, b\"\n\"say \"\"hi\"\"\"\n\"broken\"quote\n";
        let mut collector = RowCollector::new();
        CsvParser::new().parse(input, &mut collector).unwrap();

        for row in collector.rows() {
            println!("   text = {}", row["text"]);
        }
    }

    // Example 5: Cancelling from the sink
    println!("\n5. Cancellation...");
    {
        struct StopAfter {
            remaining: u32,
        }

        impl RowSink for StopAfter {
            fn start(&mut self) {}
            fn value(&mut self, _key: &str, value: &str) -> bool {
                println!("   value: {}", value);
                self.remaining -= 1;
                self.remaining > 0
            }
            fn end(&mut self) {}
        }

        let mut parser = CsvParser::new();
        let result = parser.parse("n\n1\n2\n3\n4\n", &mut StopAfter { remaining: 2 });
        match result {
            Err(CsvError::Cancelled { row, column }) => {
                println!("   stopped at row {}, column {}", row, column);
            }
            other => println!("   unexpected: {:?}", other.err()),
        }
    }

    println!("\n=== All examples completed ===");
}
