//! Command implementations.

use anyhow::{Context, Result};
use registry_client::RegistryClient;

/// Demo agencies registered by `seed`.
const SEED_AGENCIES: &[(&str, &str, &str)] = &[
    (
        "0x70997970C51812dc3A010C7d01b50e0d17dc79C8",
        "+1-202-555-0101",
        "Federal Bureau of Investigation",
    ),
    (
        "0x3C44CdDdB6a900fa2b585dd299e03d12FA4293BC",
        "+1-202-555-0102",
        "Department of Homeland Security",
    ),
    (
        "0x90F79bf6EB2c4f870365E785982E1f101E93b906",
        "+1-202-555-0103",
        "Internal Revenue Service",
    ),
];

pub async fn register(
    client: &RegistryClient,
    agency: &str,
    phone_number: &str,
    agency_name: &str,
) -> Result<()> {
    let ack = client
        .register(agency, phone_number, agency_name)
        .await
        .context("Registration failed")?;
    println!(
        "Registered {} for {} ({})",
        ack.phone_number, ack.agency_name, ack.agency
    );
    Ok(())
}

pub async fn revoke(client: &RegistryClient, agency: &str) -> Result<()> {
    let ack = client.revoke(agency).await.context("Revocation failed")?;
    println!("Revoked {} from {}", ack.phone_number, ack.agency);
    Ok(())
}

pub async fn verify(client: &RegistryClient, agency: &str, phone_number: &str) -> Result<()> {
    let outcome = client
        .verify(agency, phone_number)
        .await
        .context("Verification request failed")?;
    if outcome.valid {
        println!(
            "VALID: {} is registered to {}",
            outcome.phone_number,
            outcome.agency_name.as_deref().unwrap_or(&outcome.agency)
        );
    } else {
        println!(
            "NOT VALID: {} is not registered to {}",
            outcome.phone_number, outcome.agency
        );
    }
    Ok(())
}

pub async fn lookup_phone(client: &RegistryClient, phone_number: &str) -> Result<()> {
    let result = client
        .agency_name_by_phone(phone_number)
        .await
        .context("Lookup failed")?;
    println!("{} is registered to: {}", result.phone_number, result.agency_name);
    Ok(())
}

pub async fn lookup_agency(client: &RegistryClient, agency: &str) -> Result<()> {
    let result = client
        .agency_phone(agency)
        .await
        .context("Lookup failed")?;
    println!("{} has phone number: {}", result.agency, result.phone_number);
    Ok(())
}

pub async fn transfer_ownership(client: &RegistryClient, new_owner: &str) -> Result<()> {
    let ack = client
        .transfer_ownership(new_owner)
        .await
        .context("Ownership transfer failed")?;
    println!(
        "Ownership transferred: {} -> {}",
        ack.previous_owner, ack.new_owner
    );
    Ok(())
}

pub async fn list(client: &RegistryClient) -> Result<()> {
    let listing = client
        .registrations()
        .await
        .context("Listing request failed")?;
    if listing.registrations.is_empty() {
        println!("No registrations");
        return Ok(());
    }
    for entry in &listing.registrations {
        println!(
            "{}  {}  {}",
            entry.phone_number, entry.agency, entry.agency_name
        );
    }
    println!("{} total", listing.total);
    Ok(())
}

pub async fn health(client: &RegistryClient) -> Result<()> {
    let health = client.health().await.context("Health check failed")?;
    println!(
        "API status: {} ({} registrations)",
        health.status, health.registrations
    );
    Ok(())
}

pub async fn seed(client: &RegistryClient) -> Result<()> {
    println!("Registering demo agencies...");
    for (agency, phone_number, agency_name) in SEED_AGENCIES {
        let ack = client
            .register(agency, phone_number, agency_name)
            .await
            .with_context(|| format!("Failed to register {}", phone_number))?;
        println!("Registered {} for {}", ack.phone_number, ack.agency_name);
    }

    // Read back one entry to confirm the registry answers lookups
    let check = client
        .agency_name_by_phone(SEED_AGENCIES[0].1)
        .await
        .context("Seed verification lookup failed")?;
    println!(
        "Verification: {} is registered to {}",
        check.phone_number, check.agency_name
    );
    Ok(())
}
