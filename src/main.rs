use std::rc::Rc;

use anyhow::Result;
use clap::Parser;
use org_chart::utils::logger;
use org_chart::{Address, CliConfig, Person};

fn main() -> Result<()> {
    let config = CliConfig::parse();

    logger::init_cli_logger(config.verbose);

    tracing::info!("Starting org-chart CLI");
    if config.verbose {
        tracing::debug!("CLI config: {:?}", config);
    }

    // Addresses first; each is owned by the person it is handed to.
    let p1_addr = Address::new("s1", "s223", "city1", "500084");
    let p2_addr = Address::new("s2", "s2312", "city2", "500044");
    let p3_addr = Address::new("s3", "s23154", "city3", "500084");
    let p4_addr = Address::new("s4", "s2222", "city4", "500074");

    // Manager slots must exist (possibly empty) before the next hire refers
    // to them. A failed hire leaves its slot empty; it never produces a
    // half-built record.
    let p1 = hire("p1", "p1@email.com", "+91-4156232215", p1_addr, None);
    let p2 = hire("p2", "p2@email.com", "+91-6515115165", p2_addr, p1.clone());
    let p3 = hire("p3", "p3@email.com", "+91-1651651516", p3_addr.clone(), p2.clone());
    let p4 = hire("p4", "p4@email.com", "+91-9354999989", p4_addr, p3.clone());
    // p5 shares p3's address and fails validation: the email has no local part.
    let p5 = hire("p5", "@email.com", "+91-8799699989", p3_addr, p4.clone());

    let roster = [&p1, &p2, &p3, &p4, &p5];
    let hired = roster.iter().filter(|slot| slot.is_some()).count();
    tracing::info!("Directory built: {} of {} people added", hired, roster.len());

    // The report is anchored on p4. Its construction can fail like any other,
    // so the slot is checked instead of dereferenced blindly.
    let Some(focus) = &p4 else {
        tracing::error!("❌ p4 was never added to the directory, nothing to report");
        std::process::exit(1);
    };

    print_entry(focus);
    for person in focus.chain_of_command() {
        println!();
        print_entry(person);
    }

    Ok(())
}

fn hire(
    name: &str,
    email: &str,
    phone: &str,
    address: Address,
    manager: Option<Rc<Person>>,
) -> Option<Rc<Person>> {
    match Person::new(name, email, phone, address, manager) {
        Ok(person) => Some(Rc::new(person)),
        Err(e) => {
            tracing::error!("❌ Failed to add {} to the directory: {}", name, e);
            None
        }
    }
}

fn print_entry(person: &Person) {
    println!("{}", person);
    println!("Address");
    println!("{}", person.address());
}
