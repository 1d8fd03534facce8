//! Curated source tables for the three datasets.
//!
//! Every source caption carries its edits as `(caption, type)` pairs, so the
//! edit captions and edit types of a clip can never drift out of alignment.

use crate::types::{
    DreamixEntry, Edit,
    EditType::{self, *},
    YoutubeClip, YoutubeEntry,
};

const fn edit(caption: &'static str, edit_type: EditType) -> Edit {
    Edit { caption, edit_type }
}

pub static DREAMIX: &[DreamixEntry] = &[
    DreamixEntry {
        url: "https://dreamix-video-editing.github.io/static/videos/vid2vid_cake.mp4",
        crop_preset: 1,
        offset_w: 0.3,
        offset_t: 2.0,
        caption: "A knife is cutting a papaya on a red plate",
        edits: &[
            edit("A knife is cutting a cake on a red plate", Object),
        ],
    },
    DreamixEntry {
        url: "https://dreamix-video-editing.github.io/static/videos/vid2vid_swans.mp4",
        crop_preset: 1,
        offset_w: 0.0,
        offset_t: 1.0,
        caption: "A beach with palm trees and water",
        edits: &[
            edit("A beach with palm tree and swans in the water", Object),
        ],
    },
    DreamixEntry {
        url: "https://dreamix-video-editing.github.io/static/videos/vid2vid_circle.mp4",
        crop_preset: 1,
        offset_w: 0.3,
        offset_t: 0.0,
        caption: "A hand writing on a paper",
        edits: &[
            edit("A hand drawing a big circle on a paper", MultiMotion),
            edit("A robot claw writing on a paper", Object),
        ],
    },
    DreamixEntry {
        url: "https://dreamix-video-editing.github.io/static/videos/banner_video.mp4",
        crop_preset: 0,
        offset_w: 0.0,
        offset_t: 0.0,
        caption: "A monkey eating food",
        edits: &[
            edit("A bear dancing and jumping to upbeat music, moving his whole body", MultiMotion),
        ],
    },
    DreamixEntry {
        url: "https://dreamix-video-editing.github.io/static/videos/vid2vid_leaping.mp4",
        crop_preset: 1,
        offset_w: 0.15,
        offset_t: 0.0,
        caption: "A puppy walking",
        edits: &[
            edit("A puppy leaping", Motion),
            edit("A puppy walking with a party hat", Object),
        ],
    },
    DreamixEntry {
        url: "https://dreamix-video-editing.github.io/static/videos/vid2vid_truck_river.mp4",
        crop_preset: 1,
        offset_w: 0.4,
        offset_t: 0.0,
        caption: "Walking around an old pickup truck",
        edits: &[
            edit("Zooming out from an old pickup truck", Motion),
            edit("An old pickup truck carrying wood logs", Object),
            edit("An old pickup truck crossing a deep river", MultiMotion),
        ],
    },
    DreamixEntry {
        url: "https://dreamix-video-editing.github.io/static/videos/vid2vid_saxophone.mp4",
        crop_preset: 1,
        offset_w: 0.22,
        offset_t: 0.0,
        caption: "A man playing a saxophone",
        edits: &[
            edit("A man playing a saxophone with musical notes flying out", Style),
        ],
    },
    DreamixEntry {
        url: "https://dreamix-video-editing.github.io/static/videos/vid2vid_skateboard.mp4",
        crop_preset: 1,
        offset_w: 0.15,
        offset_t: 0.0,
        caption: "A deer walking in a forest",
        edits: &[
            edit("A deer rolling on a skateboard in a forest", Object),
        ],
    },
    DreamixEntry {
        url: "https://dreamix-video-editing.github.io/static/videos/vid2vid_fire.mp4",
        crop_preset: 1,
        offset_w: 0.25,
        offset_t: 0.0,
        caption: "Walking through a field on a wooden path",
        edits: &[
            edit("Walking through a field on a wooden path with fire on all sides", Background),
        ],
    },
    DreamixEntry {
        url: "https://dreamix-video-editing.github.io/static/videos/vid2vid_noodles.mp4",
        crop_preset: 1,
        offset_w: 0.25,
        offset_t: 0.0,
        caption: "stirring onions in a pot",
        edits: &[
            edit("stirring noodles in a pot", Object),
        ],
    },
];

pub static YOUTUBE: &[YoutubeEntry] = &[
    YoutubeEntry {
        video_id: "WD8GsHUczI0",
        clips: &[
            YoutubeClip {
                offset_t: 301.0,
                offset_w: 0.1,
                caption: "a white cat walks up to a black cat",
                edits: &[
                    edit("a white cat runs up to a tackles a black cat", Motion),
                ],
            },
        ],
    },
    YoutubeEntry {
        video_id: "6mRgGoa08AQ",
        clips: &[
            YoutubeClip {
                offset_t: 67.0,
                offset_w: 0.3,
                caption: "a bird sitting on a rock in a river",
                edits: &[
                    edit("a bird jumps from a rock into the river", Motion),
                    edit("a bird takes flight off a rock", Motion),
                    edit("a bird wearing a hat sitting on a rock in a river", Object),
                    edit("a red cardinal sitting on a rock in a river", Object),
                    edit("a red cardinal takes flight off a rock", MultiMotion),
                ],
            },
        ],
    },
    YoutubeEntry {
        video_id: "-aAcv7W9SJo",
        clips: &[
            YoutubeClip {
                offset_t: 50.0,
                offset_w: 0.3,
                caption: "a dog standing in a grassy field",
                edits: &[
                    edit("a dog is digging a hole in a grassy field", MultiMotion),
                    edit("a dog is running in a grassy field", Motion),
                    edit("a cat standing in a grassy field", Object),
                    edit("a dog standing in a grassy field on fire", Background),
                ],
            },
        ],
    },
    YoutubeEntry {
        video_id: "w78UUl5E1Z8",
        clips: &[
            YoutubeClip {
                offset_t: 3.0,
                offset_w: 0.2,
                caption: "a cat is standing in a cardboard box",
                edits: &[
                    edit("a cat jumps out of a cardboard box", Motion),
                ],
            },
            YoutubeClip {
                offset_t: 26.0,
                offset_w: 0.2,
                caption: "a cat is standing in front of a cardboard box",
                edits: &[
                    edit("a cat jumps in a cardboard box", Motion),
                ],
            },
        ],
    },
    YoutubeEntry {
        video_id: "NC_hmkNHI24",
        clips: &[
            YoutubeClip {
                offset_t: 22.0,
                offset_w: 0.25,
                caption: "two monkeys sitting by the hot springs",
                edits: &[
                    edit("two monkeys wrestling by hot springs", Motion),
                    edit("two monkeys jump into the hot springs", Motion),
                    edit("two monkeys sitting by a campfire", Background),
                ],
            },
        ],
    },
    YoutubeEntry {
        video_id: "Ovmkw9Pmtzc",
        clips: &[
            YoutubeClip {
                offset_t: 6.0,
                offset_w: 0.2,
                caption: "a baboon eating a fruit",
                edits: &[
                    edit("a baboon drops fruit onto the ground", Motion),
                    edit("a baboon waves its hands at the camera", Motion),
                    edit("a baboon eating a green apple", Style),
                    edit("a baboon eating a banana", Object),
                ],
            },
        ],
    },
    YoutubeEntry {
        video_id: "IPfzM4l7bLo",
        clips: &[
            YoutubeClip {
                offset_t: 138.0,
                offset_w: 0.2,
                caption: "a panda walking on tree branches",
                edits: &[
                    edit("a panda sleeping on tree branches", Motion),
                    edit("a panda slips and falls of the tree branches", Motion),
                    edit("a grizzly bear walking on tree branches", Object),
                    edit("a panda falling from tree branches", Motion),
                ],
            },
        ],
    },
    YoutubeEntry {
        video_id: "-8zfnYsYFB0",
        clips: &[
            YoutubeClip {
                offset_t: 76.0,
                offset_w: 0.2,
                caption: "a lion laying in the grass",
                edits: &[
                    edit("a lion roaring on the grass", Motion),
                    edit("a zebra laying in the grass", Object),
                    edit("a lion with a birthday hat dancing on the grass", MultiMotion),
                ],
            },
            YoutubeClip {
                offset_t: 107.0,
                offset_w: 0.3,
                caption: "a flamingo standing in the water",
                edits: &[
                    edit("a flamingo dunking its head in water to look for food", Motion),
                    edit("a pink flamingo standing in the water", Style),
                    edit("a flamingo opening its wings while standing in the water.", Motion),
                    edit("a pink flamingo opening its wings while standing in the water.", MultiMotion),
                ],
            },
            YoutubeClip {
                offset_t: 113.0,
                offset_w: 0.3,
                caption: "a monkey walking around in grass",
                edits: &[
                    edit("a monkey picks up a banana in the grass", MultiMotion),
                    edit("a monkey ducks in the grass to hide itself", Motion),
                    edit("a monkey jumping high in grass", Motion),
                ],
            },
        ],
    },
    YoutubeEntry {
        video_id: "fYCbiOEIcVM",
        clips: &[
            YoutubeClip {
                offset_t: 3.0,
                offset_w: 0.25,
                caption: "an orangutan sitting in the river",
                edits: &[
                    edit("an orangutan waves both its arms at the camera", Motion),
                    edit("an orangutan does pushups", Motion),
                    edit("an orangutan juggling fruits", MultiMotion),
                    edit("an orangutan scratching its head", Motion),
                    edit("an orangutan sitting next to the fire.", Background),
                    edit("an orangutan taking a bath in the river", Motion),
                ],
            },
        ],
    },
    YoutubeEntry {
        video_id: "Rab2eDwNxdY",
        clips: &[
            YoutubeClip {
                offset_t: 182.0,
                offset_w: 0.3,
                caption: "a deer walking around green shrubbery",
                edits: &[
                    edit("a deer dashes away", Motion),
                    edit("a deer walks towards the camera", Motion),
                    edit("a deer riding a skateboard around green shrubbery ", MultiMotion),
                ],
            },
        ],
    },
    YoutubeEntry {
        video_id: "FPU3MkaT_9k",
        clips: &[
            YoutubeClip {
                offset_t: 86.0,
                offset_w: 0.15,
                caption: "a panda sitting down and eating from a pile of bamboo",
                edits: &[
                    edit("a panda falls over onto a pile of bamboo", Motion),
                    edit("a panda throws bamboo leaves out of its hand", Motion),
                    edit("a panda with a cowboy hat sitting down and eating from a pile of bamboo", Object),
                    edit("a panda sitting down and eating from a pile of dried grass", Style),
                    edit("a panda sitting down and playing in a pile of colorful ribbons", Style),
                ],
            },
        ],
    },
    YoutubeEntry {
        video_id: "nA1jBUEzgSQ",
        clips: &[
            YoutubeClip {
                offset_t: 37.0,
                offset_w: 0.2,
                caption: "a duck swimming on water",
                edits: &[
                    edit("a duck dunks its head underwater", Motion),
                    edit("a swan swimming on water", Object),
                    edit("a duck sitting on a piece of wood floating on water", Object),
                    edit("a duck shaking wings on water", Motion),
                    edit("a duck swimming on water with big waves", Background),
                ],
            },
        ],
    },
    YoutubeEntry {
        video_id: "SQ9LIt2dpQQ",
        clips: &[
            YoutubeClip {
                offset_t: 10.0,
                offset_w: 0.2,
                caption: "a duck floating on a river",
                edits: &[
                    edit("a duck flies away from the water", Motion),
                    edit("a duck dives underwater", Motion),
                    edit("a camera zooms in on a duck floating on a river", Motion),
                ],
            },
        ],
    },
    YoutubeEntry {
        video_id: "WmmGvnuAF18",
        clips: &[
            YoutubeClip {
                offset_t: 48.0,
                offset_w: 0.2,
                caption: "a duckling looking for food in grass",
                edits: &[
                    edit("zooming out from a duckling looking for food in grass", Motion),
                    edit("a duckling dashes away", Motion),
                    edit("a duckling jumping on a pile of leaves", MultiMotion),
                    edit("a duckling jumping on grass", Motion),
                ],
            },
        ],
    },
    YoutubeEntry {
        video_id: "yrAc0EIiHB0",
        clips: &[
            YoutubeClip {
                offset_t: 148.0,
                offset_w: 0.2,
                caption: "a squirrel in the grass",
                edits: &[
                    edit("a squirrel burying nuts in the grass", MultiMotion),
                    edit("a startled squirrel jumps away", Motion),
                ],
            },
        ],
    },
    YoutubeEntry {
        video_id: "dT4wnmFXcGY",
        clips: &[
            YoutubeClip {
                offset_t: 4.0,
                offset_w: 0.4,
                caption: "a squirrel stands up to reach branch",
                edits: &[
                    edit("a squirrel scurries up a nearby tree", Motion),
                ],
            },
        ],
    },
    YoutubeEntry {
        video_id: "pLAHIjC8MIs",
        clips: &[
            YoutubeClip {
                offset_t: 52.0,
                offset_w: 0.2,
                caption: "a boar sniffs the dirt looking for food",
                edits: &[
                    edit("a boar digs a hole in the ground", MultiMotion),
                    edit("a boar rolls over on its belly", Motion),
                    edit("a boar jumps up and down", Motion),
                ],
            },
        ],
    },
    YoutubeEntry {
        video_id: "nc2R3JIBpd4",
        clips: &[
            YoutubeClip {
                offset_t: 15.0,
                offset_w: 0.25,
                caption: "a dog is playing near a beach",
                edits: &[
                    edit("a dog shakes water off itself to dry off", Motion),
                    edit("a dog drinks nearby water", Motion),
                    edit("a dog is playing with a ball near a beach", MultiMotion),
                    edit("a dog is catching a frisbee near a beach", MultiMotion),
                ],
            },
        ],
    },
    YoutubeEntry {
        video_id: "yC5TCzQ5V3g",
        clips: &[
            YoutubeClip {
                offset_t: 54.0,
                offset_w: 0.2,
                caption: "a dog rolling around on the grass",
                edits: &[
                    edit("a dog standing on the grass", Motion),
                    edit("a dog running on the grass", Motion),
                ],
            },
        ],
    },
    YoutubeEntry {
        video_id: "O7HE0dvNx8c",
        clips: &[
            YoutubeClip {
                offset_t: 7.0,
                offset_w: 0.3,
                caption: "a scene of a calm lake",
                edits: &[
                    edit("a scene of a water geyser erupting from a lake", Motion),
                    edit("a scene of a left to right pan of a calm lake", Motion),
                    edit("a scene of a right to left pan of a calm lake", Motion),
                    edit("a time-lapse of a calm lake", Motion),
                    edit("a scene of a lake with crashing waves", Style),
                ],
            },
        ],
    },
    YoutubeEntry {
        video_id: "UmtZLpHPRCs",
        clips: &[
            YoutubeClip {
                offset_t: 72.0,
                offset_w: 0.2,
                caption: "bright red leaves on a tree during autumn",
                edits: &[
                    edit("bright red leaves on a tree during autumn, windy day, rustling leaves", Motion),
                    edit("bright red leaves fall off a tree during autumn", Motion),
                    edit("green leaves on a tree during summer", Style),
                ],
            },
        ],
    },
    YoutubeEntry {
        video_id: "rreEpKo3o_Y",
        clips: &[
            YoutubeClip {
                offset_t: 33.0,
                offset_w: 0.2,
                caption: "a bright pink flower",
                edits: &[
                    edit("timelapse of a bright pink flower fully blooming", Motion),
                    edit("timelapse of an orange lily fully blooming", MultiMotion),
                ],
            },
        ],
    },
    YoutubeEntry {
        video_id: "zYBq6V-3BpM",
        clips: &[
            YoutubeClip {
                offset_t: 78.0,
                offset_w: 0.2,
                caption: "fresh apricots hanging off a tree",
                edits: &[
                    edit("ripe apricots fall off a tree", Motion),
                    edit("ripe apples fall off a tree", Object),
                ],
            },
            YoutubeClip {
                offset_t: 95.0,
                offset_w: 0.3,
                caption: "fresh apricots hanging off a tree",
                edits: &[
                    edit("ripe apricots fall off a tree", Motion),
                    edit("fresh apricots hanging off a tree, windy day, rustling", Motion),
                    edit("fresh apples hanging off a tree, windy day, rustling", MultiMotion),
                    edit("fresh apples hanging off a tree", Object),
                ],
            },
        ],
    },
    YoutubeEntry {
        video_id: "AMd0FIM0Lew",
        clips: &[
            YoutubeClip {
                offset_t: 123.0,
                offset_w: 0.2,
                caption: "a person standing in a bear costume",
                edits: &[
                    edit("a person doing jumping jacks in a bear costume", Motion),
                    edit("a person running in a bear costume", Motion),
                    edit("a person doing pushups in a bear costume", Motion),
                ],
            },
        ],
    },
    YoutubeEntry {
        video_id: "apKOwzzZY38",
        clips: &[
            YoutubeClip {
                offset_t: 95.0,
                offset_w: 0.1,
                caption: "fish swimming around in a man-made pond",
                edits: &[
                    edit("fish jump out of a man-made pond", Motion),
                ],
            },
        ],
    },
    YoutubeEntry {
        video_id: "q4yHz3ysMUk",
        clips: &[
            YoutubeClip {
                offset_t: 101.0,
                offset_w: 0.1,
                caption: "goldfish swimming around in a lake",
                edits: &[
                    edit("goldfish rush towards breadcrumbs thrown on the lake", MultiMotion),
                    edit("blue fish swimming around in a lake", Style),
                ],
            },
        ],
    },
    YoutubeEntry {
        video_id: "T0DV3BriqZs",
        clips: &[
            YoutubeClip {
                offset_t: 3.0,
                offset_w: 0.0,
                caption: "a turtle laying on a green floor",
                edits: &[
                    edit("a turtle laying on a green floor retracts into its shell", Motion),
                    edit("a turtle laying on a green floor rushes towards some apple slices on the ground", MultiMotion),
                ],
            },
        ],
    },
    YoutubeEntry {
        video_id: "YSXzPACM6gs",
        clips: &[
            YoutubeClip {
                offset_t: 270.0,
                offset_w: 0.2,
                caption: "a calm view of the ocean and a nearby island",
                edits: &[
                    edit("a stormy view of the ocean and nearby island, waves crashing", Style),
                ],
            },
            YoutubeClip {
                offset_t: 335.0,
                offset_w: 0.0,
                caption: "an ocean view while standing on the side of a boat",
                edits: &[
                    edit("an ocean view while standing on the side of a boat, waves crash onto the boat", Motion),
                ],
            },
        ],
    },
    YoutubeEntry {
        video_id: "QHD7sDM32Sg",
        clips: &[
            YoutubeClip {
                offset_t: 72.0,
                offset_w: 0.2,
                caption: "looking down into calm waters below from a nearby cliff",
                edits: &[
                    edit("jumping down into calm water below from a nearby cliff", Motion),
                ],
            },
        ],
    },
    YoutubeEntry {
        video_id: "wNITe1mUNxw",
        clips: &[
            YoutubeClip {
                offset_t: 36.0,
                offset_w: 0.2,
                caption: "a white jeep driving down a gravel road",
                edits: &[
                    edit("a white jeep driving down an extremely bumpy gravel road", Style),
                    edit("a white jeep driving down a dirt road", Object),
                    edit("a white jeep comes to a stop while driving down a gravel road", Motion),
                    edit("a white jeep driving down a gravel road while all trees burn in fire", Background),
                ],
            },
        ],
    },
    YoutubeEntry {
        video_id: "r7gL7fORf24",
        clips: &[
            YoutubeClip {
                offset_t: 45.0,
                offset_w: 0.2,
                caption: "riding a boat over the ocean",
                edits: &[
                    edit("huge waves crash while riding a boat over the ocean", Motion),
                ],
            },
        ],
    },
    YoutubeEntry {
        video_id: "ce-KW87rKGM",
        clips: &[
            YoutubeClip {
                offset_t: 2.0,
                offset_w: 0.3,
                caption: "dashcam view of a person driving down a highway",
                edits: &[
                    edit("dashcam view of a person coming to a stop on a highway", Motion),
                    edit("dashcam view of a person veering sidways while driving down a highway", Motion),
                    edit("dashcam view of a person driving down a highway while raining", Background),
                ],
            },
        ],
    },
    YoutubeEntry {
        video_id: "zehsnFf1Ylo",
        clips: &[
            YoutubeClip {
                offset_t: 38.0,
                offset_w: 0.0,
                caption: "a walk around view of a parked motorcycle",
                edits: &[
                    edit("a walk around view of a parked motorcycle as it tips over", Motion),
                ],
            },
        ],
    },
    YoutubeEntry {
        video_id: "nr8AeHTJ7mA",
        clips: &[
            YoutubeClip {
                offset_t: 5.0,
                offset_w: 0.3,
                caption: "a brown rabbit resting in its cage",
                edits: &[
                    edit("a brown rabbit eating a carrot in its cage", Object),
                    edit("a brown rabbit hopping around in its cage", Motion),
                    edit("a white rabbit resting in its cage", Style),
                ],
            },
        ],
    },
    YoutubeEntry {
        video_id: "GtTEPLCKENg",
        clips: &[
            YoutubeClip {
                offset_t: 22.0,
                offset_w: 0.15,
                caption: "a silver car coming to a stop",
                edits: &[
                    edit("a silver car zooms down the road", Motion),
                    edit("a red porsche comining to a stop", Object),
                ],
            },
        ],
    },
    YoutubeEntry {
        video_id: "kULvMcStIUY",
        clips: &[
            YoutubeClip {
                offset_t: 44.0,
                offset_w: 0.2,
                caption: "sideview of a racecar driving down the race track",
                edits: &[
                    edit("sideview of a racecar drifting off onto the grass near the race track", Motion),
                    edit("sideview of a racecar driving down the race track during a snowstorm", Background),
                ],
            },
        ],
    },
    YoutubeEntry {
        video_id: "DykXOiH9Kos",
        clips: &[
            YoutubeClip {
                offset_t: 127.0,
                offset_w: 0.1,
                caption: "a speeding car slows down to turn a narrow bend",
                edits: &[
                    edit("a speeding car tips over as it tries to turn a narrow bend", Motion),
                    edit("a speeding car made of lego slows down to turn a narrow bend", Style),
                    edit("a speeding car with wings flies to the sky", MultiMotion),
                ],
            },
        ],
    },
];

/// LOVEU-TGVE videos that are kept; every other manifest row is skipped.
pub static LOVEU_NAMES: &[&str] = &[
    "gold-fish",
    "trucks-race",
    "varanus-cage",
    "squirrel-climb",
    "dirt-road-driving",
    "audi-snow-trail",
    "mallard-duck-flight",
    "eiffel-flyover",
    "las-vegas-time-lapse",
    "warsaw-multimedia-fountain",
    "geometric-video-background",
    "typewriter-super-slow-motion",
    "raindrops",
    "lotus",
    "earth-full-view",
    "setting-sun",
    "cat-in-the-sun",
    "swans",
    "red-roses-sunny-day",
    "singapore-airbus-a380-landing",
    "fireworks-display",
    "seagull-flying",
    "aircraft-landing",
    "sharks-swimming",
    "bird-on-feeder",
    "cows-grazing",
    "ferris-wheel-timelapse",
    "butterfly-feeding-slow-motion",
    "ski-lift-time-lapse",
    "ship-sailing",
    "deer-eating-leaves",
    "airplane-and-contrail",
    "wind-turbines-at-dusk",
    "american-flag-in-wind",
    "pouring-beer-from-bottle",
];

pub fn is_loveu_name(name: &str) -> bool {
    LOVEU_NAMES.contains(&name)
}
