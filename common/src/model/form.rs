//! Validation for the admin product form.
//!
//! Runs entirely before any repository call: a form that fails here never
//! touches the remote catalog or the blob store. Error variants double as
//! the user-facing rejection messages.

use thiserror::Error;

use super::product::NewProduct;

/// Largest accepted image file, in bytes (2 MiB).
pub const MAX_IMAGE_BYTES: u64 = 2 * 1024 * 1024;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ValidationError {
    #[error("All fields are required ({0} is missing)")]
    Missing(&'static str),
    #[error("Price must be a positive number")]
    InvalidPrice,
    #[error("Please upload an image file")]
    NotAnImage,
    #[error("Image size should be less than 2MB")]
    ImageTooLarge,
}

/// Raw values of the product form, exactly as typed. `price` stays a string
/// until validation so the input field can hold partial edits.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ProductForm {
    pub name: String,
    pub description: String,
    pub price: String,
    /// Data URL of the picked file, or the existing public URL when editing
    /// without replacing the image.
    pub image: String,
    pub external_link: String,
}

impl ProductForm {
    /// Checks every field and parses the price. Returns the draft the
    /// repository accepts, or the first failure encountered.
    pub fn validate(&self) -> Result<NewProduct, ValidationError> {
        let name = required(&self.name, "name")?;
        let description = required(&self.description, "description")?;
        let price_raw = required(&self.price, "price")?;
        let image = required(&self.image, "image")?;
        let external_link = required(&self.external_link, "external link")?;

        let price: f64 = price_raw
            .parse()
            .map_err(|_| ValidationError::InvalidPrice)?;
        if !price.is_finite() || price <= 0.0 {
            return Err(ValidationError::InvalidPrice);
        }

        Ok(NewProduct {
            name,
            description,
            price,
            image,
            external_link,
        })
    }
}

fn required(value: &str, field: &'static str) -> Result<String, ValidationError> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        Err(ValidationError::Missing(field))
    } else {
        Ok(trimmed.to_string())
    }
}

/// File-level checks run when a file is picked, before it is read into a
/// data URL. The repository itself trusts its input.
pub fn check_image_file(mime: &str, size: u64) -> Result<(), ValidationError> {
    if !mime.starts_with("image/") {
        return Err(ValidationError::NotAnImage);
    }
    if size > MAX_IMAGE_BYTES {
        return Err(ValidationError::ImageTooLarge);
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn filled() -> ProductForm {
        ProductForm {
            name: "Skull Tee".to_string(),
            description: "A tee".to_string(),
            price: "19.99".to_string(),
            image: "data:image/jpeg;base64,AAAA".to_string(),
            external_link: "https://store.example/x".to_string(),
        }
    }

    #[test]
    fn accepts_a_complete_form() {
        let draft = filled().validate().unwrap();
        assert_eq!(draft.name, "Skull Tee");
        assert_eq!(draft.price, 19.99);
    }

    #[test]
    fn rejects_empty_fields() {
        for field in ["name", "description", "price", "image", "external link"] {
            let mut form = filled();
            match field {
                "name" => form.name.clear(),
                "description" => form.description.clear(),
                "price" => form.price.clear(),
                "image" => form.image.clear(),
                _ => form.external_link = "   ".to_string(),
            }
            assert_eq!(form.validate(), Err(ValidationError::Missing(field)));
        }
    }

    #[test]
    fn rejects_zero_and_negative_prices() {
        for bad in ["0", "0.00", "-19.99"] {
            let mut form = filled();
            form.price = bad.to_string();
            assert_eq!(form.validate(), Err(ValidationError::InvalidPrice));
        }
    }

    #[test]
    fn rejects_unparseable_prices() {
        let mut form = filled();
        form.price = "free".to_string();
        assert_eq!(form.validate(), Err(ValidationError::InvalidPrice));
    }

    #[test]
    fn trims_whitespace_before_storing() {
        let mut form = filled();
        form.name = "  Skull Tee  ".to_string();
        assert_eq!(form.validate().unwrap().name, "Skull Tee");
    }

    #[test]
    fn image_file_checks() {
        assert_eq!(check_image_file("image/png", 1024), Ok(()));
        assert_eq!(
            check_image_file("application/pdf", 1024),
            Err(ValidationError::NotAnImage)
        );
        assert_eq!(
            check_image_file("image/jpeg", MAX_IMAGE_BYTES + 1),
            Err(ValidationError::ImageTooLarge)
        );
    }
}
