//! Static portfolio content: profile copy, work history, and contact links.

/// One entry in the work experience timeline
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Experience {
    /// Job title
    pub title: &'static str,
    /// Employer
    pub company: &'static str,
    /// First month of the role, e.g. "November 2022"
    pub start_date: &'static str,
    /// Last month of the role
    pub end_date: &'static str,
    /// Bullet points, in display order (may be empty)
    pub details: &'static [&'static str],
}

impl Experience {
    /// Date range shown under the company name
    #[must_use]
    pub fn date_range(&self) -> String {
        format!("{} - {}", self.start_date, self.end_date)
    }
}

/// A contact tile in the contact section
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ContactLink {
    /// Tile caption
    pub label: &'static str,
    /// Single-cell glyph drawn above the caption
    pub icon: &'static str,
    /// Link target
    pub href: &'static str,
}

/// Name shown in the snapshot section and the footer.
pub const NAME: &str = "Erika Seto";

/// Headline in the snapshot section.
pub const HEADLINE: &str = "Erika Seto, PharmD, RPh";

/// Subtitle under the headline.
pub const TAGLINE: &str = "Software Development Student";

/// Heading of the about section.
pub const ABOUT_HEADING: &str = "About Me";

/// Paragraphs of the about section.
pub const ABOUT: [&str; 2] = [
    "I'm a licensed pharmacist and emerging software developer with experience in fast-paced \
     healthcare environments, where I gained firsthand insight into the importance of efficient \
     systems, accurate data, and user-centered design for achieving reliable and effective \
     outcomes. I'm currently completing a Master's in Software Development, where I've gained \
     hands-on experience with Python, SQL, data structures, and system design.",
    "I am driven by the goal of developing software and systems that empower users, helping them \
     achieve their goals more efficiently, confidently, and effectively. By combining my clinical \
     background with technical skills, I strive to design solutions that solve real-world \
     problems, improve outcomes, and create meaningful impact.",
];

/// Heading of the experience section.
pub const EXPERIENCE_HEADING: &str = "Work Experience";

/// Work history, most recent first.
pub const EXPERIENCES: [Experience; 4] = [
    Experience {
        title: "District Support Pharmacist",
        company: "CVS Pharmacy",
        start_date: "November 2022",
        end_date: "October 2023",
        details: &[
            "Trained new technicians and interns on system workflows, prescription fulfillment \
             procedures, and inventory management processes.",
            "Adapted quickly to different pharmacy locations, integrating into new teams and \
             workflows, and resolving inherited tasks to maintain smooth operations and \
             regulatory compliance.",
            "Administered and documented immunizations during high-volume vaccination events, \
             ensuring precise clinical documentation and adherence to record-keeping standards.",
        ],
    },
    Experience {
        title: "Staff Pharmacist",
        company: "Walgreens",
        start_date: "February 2022",
        end_date: "November 2022",
        details: &[
            "Reviewed medication profiles for potential drug interactions and therapy conflicts, \
             coordinating with prescribers to ensure clinically appropriate treatment plans.",
            "Educated patients on proper medication use, safety considerations, and adherence \
             strategies while maintaining compliance with HIPAA.",
            "Supervised 2 pharmacy technicians and oversaw fulfillment of 1,400+ prescriptions \
             weekly while ensuring operational efficiency and regulatory compliance.",
        ],
    },
    Experience {
        title: "Pharmacy Intern",
        company: "CVS Pharmacy",
        start_date: "September 2017",
        end_date: "May 2021",
        details: &[
            "Conducted 200+ weekly patient care calls to strengthen patient relationships, \
             improve medication adherence, and proactively address compliance risks.",
            "Delivered high-quality customer support in a fast-paced environment, managing high \
             call volumes and resolving patient inquiries efficiently.",
            "Resolved third-party payer rejections and facilitated prescription transfers to \
             ensure timely medication access and continuity of care.",
        ],
    },
    Experience {
        title: "Pharmacy Technician",
        company: "CVS Pharmacy",
        start_date: "March 2017",
        end_date: "September 2017",
        details: &[],
    },
];

/// Heading of the contact section.
pub const CONTACT_HEADING: &str = "Contact";

/// Contact tiles, left to right.
pub const CONTACT_LINKS: [ContactLink; 2] = [
    ContactLink {
        label: "LinkedIn",
        icon: "in",
        href: "https://www.linkedin.com/in/erika-seto/",
    },
    ContactLink {
        label: "Email",
        icon: "@",
        href: "mailto:seto.erika@gmail.com",
    },
];

/// Footer line for the given year.
#[must_use]
pub fn footer(year: i32) -> String {
    format!("\u{a9} {year} {NAME}. All rights reserved.")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_experiences_are_in_order() {
        let titles: Vec<_> = EXPERIENCES.iter().map(|e| e.title).collect();
        assert_eq!(
            titles,
            [
                "District Support Pharmacist",
                "Staff Pharmacist",
                "Pharmacy Intern",
                "Pharmacy Technician"
            ]
        );
    }

    #[test]
    fn test_only_technician_has_no_details() {
        let empty: Vec<_> = EXPERIENCES
            .iter()
            .filter(|e| e.details.is_empty())
            .map(|e| e.title)
            .collect();
        assert_eq!(empty, ["Pharmacy Technician"]);
        assert!(EXPERIENCES[..3].iter().all(|e| e.details.len() == 3));
    }

    #[test]
    fn test_date_range() {
        assert_eq!(EXPERIENCES[1].date_range(), "February 2022 - November 2022");
    }

    #[test]
    fn test_contact_links() {
        assert!(CONTACT_LINKS[0].href.starts_with("https://www.linkedin.com/"));
        assert!(CONTACT_LINKS[1].href.starts_with("mailto:"));
    }

    #[test]
    fn test_footer() {
        assert_eq!(footer(2025), "\u{a9} 2025 Erika Seto. All rights reserved.");
    }
}
