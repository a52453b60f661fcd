//! Fixed default datasets used for lazy seeding.
//!
//! Profile, skills, projects, testimonials and timeline are populated with
//! these sets the first time they are observed empty. Posts and contact
//! messages are never seeded; empty is a valid terminal state for them.

use crate::models::{Profile, ProjectDraft, TestimonialDraft, TimelineEntryDraft};

/// Username of the credential seeded at store init.
pub const DEFAULT_ADMIN_USER: &str = "admin";

/// Password of the seeded credential. Single-operator tool; the operator is
/// expected to change this through the dashboard.
pub const DEFAULT_ADMIN_PASSWORD: &str = "admin123";

/// Starting skill set, inserted on the first empty read.
pub const DEFAULT_SKILLS: &[(&str, i64)] = &[
    ("Python", 75),
    ("JavaScript", 65),
    ("HTML/CSS", 80),
    ("SQL", 70),
    ("Machine Learning", 60),
    ("Web Development", 75),
    ("Problem Solving", 85),
];

pub fn default_profile() -> Profile {
    Profile {
        id: 1,
        name: "TUYISENGE Eric".into(),
        location: "Ruhengeri, Rwanda".into(),
        phone: "+250 789595211".into(),
        university: "INES-Ruhengeri".into(),
        field: "BSc Computer Science, Year 3".into(),
        bio: "I am a passionate technology enthusiast with a focus on AI and software \
              development. I enjoy solving complex problems and building innovative solutions."
            .into(),
        email: "tuyisengeeric034@gmail.com".into(),
        github: "https://github.com/t-eric12".into(),
        linkedin: "https://linkedin.com/in/tuyisenge-eric-0b1a1b1b4".into(),
        profile_pic: None,
    }
}

pub fn default_projects() -> Vec<ProjectDraft> {
    vec![
        ProjectDraft {
            title: "Student Attendance System using Face Recognition".into(),
            kind: "Group Project".into(),
            year: "Year 2".into(),
            description: "Developed a facial recognition system for automating student \
                          attendance tracking. Used Python, OpenCV, and machine learning \
                          algorithms to identify students and record attendance automatically."
                .into(),
            link: "https://github.com/yourusername/gracommento".into(),
            image: None,
        },
        ProjectDraft {
            title: "E-commerce Web Application".into(),
            kind: "Individual Project".into(),
            year: "Year 1".into(),
            description: "Created a responsive e-commerce platform with user authentication, \
                          product catalog, shopping cart, and payment integration. Used HTML, \
                          CSS, JavaScript, and PHP for development."
                .into(),
            link: "https://github.com/yourusername/ecommerce-app".into(),
            image: None,
        },
        ProjectDraft {
            title: "Graduate Connect and Mentorship AI-powered Recommendation System".into(),
            kind: "Dissertation/Final Year Project".into(),
            year: "Year 3".into(),
            description: "Researching and developing an AI system that can analyze student \
                          profiles and recommend suitable mentors. Utilizing machine learning, \
                          natural language processing, and educational databases for accurate \
                          matching."
                .into(),
            link: "https://github.com/your-username/graduate-connect".into(),
            image: None,
        },
    ]
}

pub fn default_testimonials() -> Vec<TestimonialDraft> {
    vec![
        TestimonialDraft {
            text: "An exceptionally talented student with great attention to detail. Their \
                   work on the AI project was outstanding."
                .into(),
            author: "Mr. Clement MUNYENTWARI, CEO of Ikigugu Group Ltd".into(),
        },
        TestimonialDraft {
            text: "A brilliant problem solver! Their final year project shows real innovation \
                   and technical expertise."
                .into(),
            author: "Dr. Theodore, Project Supervisor".into(),
        },
    ]
}

pub fn default_timeline() -> Vec<TimelineEntryDraft> {
    vec![
        TimelineEntryDraft {
            year: "2022".into(),
            title: "University Enrollment".into(),
            description: "Started BSc in Computer Science at INES-Ruhengeri".into(),
        },
        TimelineEntryDraft {
            year: "2023".into(),
            title: "First Programming Competition".into(),
            description: "Participated in the Ikigugu Group Ltd competition".into(),
        },
        TimelineEntryDraft {
            year: "2024".into(),
            title: "Internship at Tech Company".into(),
            description: "Completed a 2-month internship at a leading software company".into(),
        },
        TimelineEntryDraft {
            year: "2025".into(),
            title: "Dissertation Submission".into(),
            description: "Working on final year project: Graduate Connect and Mentorship \
                          AI-powered Recommendation System"
                .into(),
        },
    ]
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn default_skill_names_are_unique() {
        let names: HashSet<_> = DEFAULT_SKILLS.iter().map(|(name, _)| *name).collect();
        assert_eq!(names.len(), DEFAULT_SKILLS.len());
    }

    #[test]
    fn default_skill_levels_in_range() {
        assert!(DEFAULT_SKILLS.iter().all(|(_, level)| (0..=100).contains(level)));
    }

    #[test]
    fn default_collections_are_nonempty() {
        assert_eq!(default_projects().len(), 3);
        assert_eq!(default_testimonials().len(), 2);
        assert_eq!(default_timeline().len(), 4);
        assert_eq!(default_profile().id, 1);
    }
}
