//! # Customers
//!
//! Customer records and the farm's address book.
//!
//! ## Identity
//! A customer is identified by name and phone number. The address is
//! descriptive only and the cart is never compared.
//!
//! Cloning a `Customer` clones the [`SharedCart`] handle, not the cart: the
//! address-book entry, the copy handed to a transaction and any copy returned
//! from a lookup all shop into the same cart.

use std::fmt;
use std::hash::{Hash, Hasher};

use crate::cart::SharedCart;
use crate::error::{CoreError, CoreResult};
use crate::validation::{validate_phone_number, validate_required};

// =============================================================================
// Customer
// =============================================================================

/// A customer who visits the farm.
#[derive(Debug, Clone)]
pub struct Customer {
    name: String,
    phone_number: i64,
    address: String,
    cart: SharedCart,
}

impl Customer {
    /// Creates a customer with an empty cart.
    ///
    /// ## Rules
    /// - `name` and `address` are trimmed and must not be empty
    /// - `phone_number` must not be negative
    ///
    /// ## Example
    /// ```rust
    /// use farm_core::Customer;
    ///
    /// let jack = Customer::new(" Jack ", 1234567, "1 Farm Lane").unwrap();
    /// assert_eq!(jack.name(), "Jack");
    /// assert!(Customer::new("", 1234567, "1 Farm Lane").is_err());
    /// ```
    pub fn new(name: &str, phone_number: i64, address: &str) -> CoreResult<Self> {
        let name = validate_required("name", name)?;
        let address = validate_required("address", address)?;
        validate_phone_number(phone_number)?;

        Ok(Customer {
            name,
            phone_number,
            address,
            cart: SharedCart::new(),
        })
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn phone_number(&self) -> i64 {
        self.phone_number
    }

    pub fn address(&self) -> &str {
        &self.address
    }

    /// Handle to this customer's cart.
    pub fn cart(&self) -> &SharedCart {
        &self.cart
    }

    /// Replaces the name, with the same rules as construction.
    pub fn set_name(&mut self, name: &str) -> CoreResult<()> {
        self.name = validate_required("name", name)?;
        Ok(())
    }

    /// Replaces the phone number, with the same rules as construction.
    pub fn set_phone_number(&mut self, phone_number: i64) -> CoreResult<()> {
        validate_phone_number(phone_number)?;
        self.phone_number = phone_number;
        Ok(())
    }

    /// Replaces the address, with the same rules as construction.
    pub fn set_address(&mut self, address: &str) -> CoreResult<()> {
        self.address = validate_required("address", address)?;
        Ok(())
    }

    fn matches(&self, name: &str, phone_number: i64) -> bool {
        self.name == name && self.phone_number == phone_number
    }
}

impl PartialEq for Customer {
    fn eq(&self, other: &Self) -> bool {
        self.matches(&other.name, other.phone_number)
    }
}

impl Eq for Customer {}

impl Hash for Customer {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.name.hash(state);
        self.phone_number.hash(state);
    }
}

/// `Name: Jack | Phone Number: 1234567 | Address: 1 Farm Lane`
impl fmt::Display for Customer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Name: {} | Phone Number: {} | Address: {}",
            self.name, self.phone_number, self.address
        )
    }
}

// =============================================================================
// Address Book
// =============================================================================

/// The farm's customer records, in the order they were added.
#[derive(Debug, Clone, Default)]
pub struct AddressBook {
    customers: Vec<Customer>,
}

impl AddressBook {
    pub fn new() -> Self {
        AddressBook {
            customers: Vec::new(),
        }
    }

    /// Adds a customer, rejecting one that is already recorded.
    pub fn add_customer(&mut self, customer: Customer) -> CoreResult<()> {
        if self.contains_customer(&customer) {
            return Err(CoreError::DuplicateCustomer(customer.to_string()));
        }
        self.customers.push(customer);
        Ok(())
    }

    /// Copies of every record. The copies share their carts with the book.
    pub fn all_records(&self) -> Vec<Customer> {
        self.customers.clone()
    }

    pub fn contains_customer(&self, customer: &Customer) -> bool {
        self.customers.iter().any(|c| c == customer)
    }

    /// Looks a customer up by identity.
    pub fn get_customer(&self, name: &str, phone_number: i64) -> CoreResult<Customer> {
        self.customers
            .iter()
            .find(|c| c.matches(name, phone_number))
            .cloned()
            .ok_or_else(|| CoreError::CustomerNotFound {
                name: name.to_string(),
                phone_number,
            })
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ValidationError;
    use crate::types::{Barcode, Product, Quality};

    fn jack() -> Customer {
        Customer::new("Jack", 1234567, "1 Farm Lane").unwrap()
    }

    #[test]
    fn test_customer_trims_fields() {
        let customer = Customer::new("  Jill ", 42, " 2 Hill Road\t").unwrap();
        assert_eq!(customer.name(), "Jill");
        assert_eq!(customer.address(), "2 Hill Road");
    }

    #[test]
    fn test_customer_rejects_invalid_fields() {
        assert_eq!(
            Customer::new(" ", 1, "addr").unwrap_err(),
            CoreError::Validation(ValidationError::Required {
                field: "name".to_string()
            })
        );
        assert!(Customer::new("Jack", 1, "").is_err());
        assert!(matches!(
            Customer::new("Jack", -1, "addr"),
            Err(CoreError::Validation(ValidationError::MustNotBeNegative { .. }))
        ));
    }

    #[test]
    fn test_customer_equality_ignores_address() {
        let other = Customer::new("Jack", 1234567, "Somewhere else").unwrap();
        assert_eq!(jack(), other);
        assert_ne!(jack(), Customer::new("Jack", 7654321, "1 Farm Lane").unwrap());
    }

    #[test]
    fn test_customer_setters_validate() {
        let mut customer = jack();
        assert!(customer.set_name("").is_err());
        assert_eq!(customer.name(), "Jack");

        customer.set_name(" John ").unwrap();
        assert_eq!(customer.name(), "John");
        assert!(customer.set_phone_number(-5).is_err());
        customer.set_address("3 Dale").unwrap();
        assert_eq!(customer.address(), "3 Dale");
    }

    #[test]
    fn test_customer_display() {
        assert_eq!(
            jack().to_string(),
            "Name: Jack | Phone Number: 1234567 | Address: 1 Farm Lane"
        );
    }

    #[test]
    fn test_address_book_rejects_duplicates() {
        let mut book = AddressBook::new();
        book.add_customer(jack()).unwrap();

        let result = book.add_customer(Customer::new("Jack", 1234567, "Elsewhere").unwrap());
        assert!(matches!(result, Err(CoreError::DuplicateCustomer(_))));
        assert_eq!(book.all_records().len(), 1);
    }

    #[test]
    fn test_address_book_lookup() {
        let mut book = AddressBook::new();
        book.add_customer(jack()).unwrap();

        assert_eq!(book.get_customer("Jack", 1234567).unwrap(), jack());
        assert!(matches!(
            book.get_customer("Jack", 1),
            Err(CoreError::CustomerNotFound { phone_number: 1, .. })
        ));
    }

    #[test]
    fn test_lookup_shares_the_cart() {
        let mut book = AddressBook::new();
        book.add_customer(jack()).unwrap();

        let found = book.get_customer("Jack", 1234567).unwrap();
        found
            .cart()
            .add_product(Product::new(Barcode::Egg, Quality::Regular));

        let again = book.get_customer("Jack", 1234567).unwrap();
        assert_eq!(again.cart().len(), 1);
        assert!(found.cart().same_cart(again.cart()));
    }
}
