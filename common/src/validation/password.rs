/// Five-criterion password strength used by the strength meter.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PasswordStrength {
    pub score: u8,
    pub missing: Vec<&'static str>,
}

const LABELS: [&str; 5] = ["Very Weak", "Weak", "Fair", "Good", "Strong"];
const COLORS: [&str; 5] = ["#ff4444", "#ff8800", "#ffbb00", "#88cc00", "#00cc44"];

impl PasswordStrength {
    pub fn evaluate(password: &str) -> Self {
        let criteria: [(bool, &'static str); 5] = [
            (password.chars().count() >= 8, "At least 8 characters"),
            (password.chars().any(|c| c.is_ascii_lowercase()), "Lowercase letter"),
            (password.chars().any(|c| c.is_ascii_uppercase()), "Uppercase letter"),
            (password.chars().any(|c| c.is_ascii_digit()), "Number"),
            (password.chars().any(|c| !c.is_ascii_alphanumeric()), "Special character"),
        ];
        let mut score = 0;
        let mut missing = Vec::new();
        for (met, label) in criteria {
            if met {
                score += 1;
            } else {
                missing.push(label);
            }
        }
        Self { score, missing }
    }

    pub fn label(&self) -> &'static str {
        LABELS[usize::from(self.score.max(1)) - 1]
    }

    pub fn color(&self) -> &'static str {
        match self.score {
            0 => "#ddd",
            n => COLORS[usize::from(n) - 1],
        }
    }

    /// Fill of the strength bar, 0-100.
    pub fn percent(&self) -> u8 {
        self.score * 20
    }

    /// Coarse level class: `weak`, `medium` or `strong`.
    pub fn level(&self) -> &'static str {
        match self.score {
            0..=2 => "weak",
            3 => "medium",
            _ => "strong",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_password_is_very_weak() {
        let s = PasswordStrength::evaluate("");
        assert_eq!(s.score, 0);
        assert_eq!(s.label(), "Very Weak");
        assert_eq!(s.missing.len(), 5);
        assert_eq!(s.color(), "#ddd");
    }

    #[test]
    fn full_marks() {
        let s = PasswordStrength::evaluate("Pharma#2025");
        assert_eq!(s.score, 5);
        assert_eq!(s.label(), "Strong");
        assert_eq!(s.level(), "strong");
        assert!(s.missing.is_empty());
        assert_eq!(s.percent(), 100);
    }

    #[test]
    fn reports_what_is_missing() {
        let s = PasswordStrength::evaluate("lowercase");
        assert_eq!(s.score, 2);
        assert_eq!(s.level(), "weak");
        assert_eq!(s.missing, vec!["Uppercase letter", "Number", "Special character"]);
    }
}
