//! Static site content: skills, experience, works, socials, navigation.

use crate::pages::Route;

/// A skill with a 0-100 proficiency level.
#[derive(Clone, Copy, Debug)]
pub struct Skill {
	pub name: &'static str,
	pub level: u32,
}

/// One entry of the static experience timeline.
#[derive(Clone, Copy, Debug)]
pub struct ExperienceEntry {
	pub year: &'static str,
	pub role: &'static str,
	pub company: &'static str,
}

/// A portfolio work sample.
#[derive(Clone, Copy, Debug)]
pub struct WorkItem {
	pub id: u32,
	pub title: &'static str,
	pub category: &'static str,
	pub description: &'static str,
	pub image: &'static str,
	pub year: &'static str,
}

/// An external social profile.
#[derive(Clone, Copy, Debug)]
pub struct SocialLink {
	pub label: &'static str,
	pub href: &'static str,
	pub handle: &'static str,
}

/// A navigation menu entry.
#[derive(Clone, Copy, Debug)]
pub struct NavItem {
	pub num: &'static str,
	pub label: &'static str,
	pub route: Route,
}

pub const SKILLS: [Skill; 4] = [
	Skill { name: "Frontend Development", level: 90 },
	Skill { name: "UI/UX Design", level: 85 },
	Skill { name: "Backend Development", level: 75 },
	Skill { name: "3D / Motion Design", level: 70 },
];

pub const EXPERIENCES: [ExperienceEntry; 3] = [
	ExperienceEntry { year: "2025 - now", role: "Frontend Dev Lead", company: "???" },
	ExperienceEntry { year: "2023 - 2025", role: "Frontend Dev Lead", company: "YUMEMI Inc." },
	ExperienceEntry { year: "2020 - 2023", role: "Frontend Dev / Lead", company: "Sky Co., Ltd." },
];

pub const WORKS: [WorkItem; 4] = [
	WorkItem {
		id: 1,
		title: "E-Commerce Platform",
		category: "Web Development",
		description: "モダンなECサイトの設計と開発",
		image: "/images/inenico-writing.png",
		year: "2025",
	},
	WorkItem {
		id: 2,
		title: "Brand Identity System",
		category: "Design",
		description: "スタートアップのブランディング",
		image: "/images/inenico-phone.png",
		year: "2025",
	},
	WorkItem {
		id: 3,
		title: "Mobile Application",
		category: "App Development",
		description: "iOS/Androidアプリの開発",
		image: "/images/inenico-standing.png",
		year: "2024",
	},
	WorkItem {
		id: 4,
		title: "Interactive Experience",
		category: "Creative Development",
		description: "WebGLを使ったインタラクティブ体験",
		image: "/images/inenico-waving.png",
		year: "2024",
	},
];

pub const SOCIALS: [SocialLink; 2] = [
	SocialLink { label: "GitHub", href: "https://github.com", handle: "@inenico" },
	SocialLink { label: "X", href: "https://twitter.com", handle: "@inenico" },
];

pub const NAV_ITEMS: [NavItem; 4] = [
	NavItem { num: "01", label: "Home", route: Route::Home },
	NavItem { num: "02", label: "About", route: Route::About },
	NavItem { num: "03", label: "Works", route: Route::Works },
	NavItem { num: "04", label: "Contact", route: Route::Contact },
];
