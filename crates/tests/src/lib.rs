#[cfg(test)]
mod common;

#[cfg(test)]
mod session_tests;

#[cfg(test)]
mod register_tests;

#[cfg(test)]
mod orphanage_tests;

#[cfg(test)]
mod donation_tests;

#[cfg(test)]
mod admin_tests;
