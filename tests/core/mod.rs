// tests/core/mod.rs

#[cfg(test)]
mod bhash;
#[cfg(test)]
mod blowfish;
#[cfg(test)]
mod layout;
#[cfg(test)]
mod params;
